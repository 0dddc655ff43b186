//! Relay board wire protocol
//!
//! A board is switched with a single output report. The first byte carries the
//! state; the board expects a 3-byte report, the remaining bytes are padding.

/// Output report length expected by the board
pub const REPORT_SIZE: usize = 3;

/// State byte written to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WireState {
    Off = 0x01,
    On = 0xF1,
}

impl WireState {
    /// Raw protocol byte
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for WireState {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0x01 => Ok(Self::Off),
            0xF1 => Ok(Self::On),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for WireState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WireState::Off => write!(f, "off"),
            WireState::On => write!(f, "on"),
        }
    }
}

/// Build the output report for a state
pub fn build_report(state: WireState) -> [u8; REPORT_SIZE] {
    let mut buf = [0u8; REPORT_SIZE];
    buf[0] = state.as_byte();
    buf
}
