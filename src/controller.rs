//! Relay writer and fan-out controller
//!
//! Every write is one scoped open/write/close cycle, so at most one device
//! handle is open at a time. A failing device is recorded and the fan-out
//! moves on to the next one.

use std::fmt;

use hidrelay_transport::{
    build_report, DeviceDescriptor, RelayTransport, TransportError, WireState,
};
use tracing::{debug, info, warn};

use crate::error::DeviceFailure;
use crate::hold::{Hold, ThreadSleep, TOGGLE_HOLD};

/// What to do with the relays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayCommand {
    SetOn,
    SetOff,
    /// On, hold for `TOGGLE_HOLD`, then off
    Toggle,
}

impl fmt::Display for RelayCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayCommand::SetOn => write!(f, "on"),
            RelayCommand::SetOff => write!(f, "off"),
            RelayCommand::Toggle => write!(f, "toggle"),
        }
    }
}

/// Result of one write attempt against one device
#[derive(Debug)]
pub struct DeviceOutcome {
    /// Path of the device written to
    pub path: String,
    /// State that was sent
    pub state: WireState,
    pub result: Result<(), DeviceFailure>,
}

impl DeviceOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Open device handle that is closed when the guard goes out of scope
struct DeviceGuard<'a, T: RelayTransport> {
    transport: &'a mut T,
    handle: Option<T::Handle>,
}

impl<'a, T: RelayTransport> DeviceGuard<'a, T> {
    fn open(transport: &'a mut T, path: &str) -> Result<Self, TransportError> {
        let handle = transport.open(path)?;
        Ok(Self {
            transport,
            handle: Some(handle),
        })
    }

    fn write(&mut self, report: &[u8]) -> Result<usize, TransportError> {
        match self.handle.as_mut() {
            Some(handle) => self.transport.write(handle, report),
            None => unreachable!("handle is only taken on drop"),
        }
    }
}

impl<T: RelayTransport> Drop for DeviceGuard<'_, T> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.transport.close(handle);
        }
    }
}

/// Send one state report to one device
///
/// An open failure skips the write. The handle is closed whatever the write
/// returns.
pub fn write_relay<T: RelayTransport>(
    transport: &mut T,
    descriptor: &DeviceDescriptor,
    state: WireState,
) -> DeviceOutcome {
    let path = descriptor.path();
    let report = build_report(state);

    let result = match DeviceGuard::open(transport, path) {
        Ok(mut device) => match device.write(&report) {
            Ok(written) => {
                debug!("Wrote {} byte(s) to {}: {:02X?}", written, path, report);
                Ok(())
            }
            Err(e) => Err(DeviceFailure::WriteFailed(e)),
        },
        Err(e) => Err(DeviceFailure::OpenFailed(e)),
    };

    if let Err(ref failure) = result {
        warn!("Relay {} ({}): {}", path, state, failure);
    }

    DeviceOutcome {
        path: path.to_string(),
        state,
        result,
    }
}

/// Applies a command to every enumerated device
pub struct FanOut<H: Hold = ThreadSleep> {
    hold: H,
}

impl<H: Hold> FanOut<H> {
    pub fn new(hold: H) -> Self {
        Self { hold }
    }

    /// Apply `command` to each descriptor in order
    ///
    /// Outcomes come back in write order; a toggle yields the ON phase
    /// followed by the OFF phase. An empty list does nothing, not even the
    /// toggle hold.
    pub fn apply<T: RelayTransport>(
        &mut self,
        transport: &mut T,
        descriptors: &[DeviceDescriptor],
        command: RelayCommand,
    ) -> Vec<DeviceOutcome> {
        if descriptors.is_empty() {
            return Vec::new();
        }

        match command {
            RelayCommand::SetOn => write_all(transport, descriptors, WireState::On),
            RelayCommand::SetOff => write_all(transport, descriptors, WireState::Off),
            RelayCommand::Toggle => {
                let mut outcomes = write_all(transport, descriptors, WireState::On);
                info!("Holding relays on for {:?}", TOGGLE_HOLD);
                self.hold.hold(TOGGLE_HOLD);
                outcomes.extend(write_all(transport, descriptors, WireState::Off));
                outcomes
            }
        }
    }
}

fn write_all<T: RelayTransport>(
    transport: &mut T,
    descriptors: &[DeviceDescriptor],
    state: WireState,
) -> Vec<DeviceOutcome> {
    let outcomes: Vec<DeviceOutcome> = descriptors
        .iter()
        .map(|descriptor| write_relay(transport, descriptor, state))
        .collect();

    let ok = outcomes.iter().filter(|o| o.is_success()).count();
    info!("Switched {}/{} relay board(s) {}", ok, outcomes.len(), state);
    outcomes
}
