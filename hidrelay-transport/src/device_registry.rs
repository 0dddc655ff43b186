//! Device registry - default relay board identification
//!
//! Boards are matched on VID/PID only. There is no firmware query to tell
//! individual models apart.

/// Relay board vendor ID
pub const VENDOR_ID: u16 = 0x0519;

/// Relay board product ID
pub const PRODUCT_ID: u16 = 0x2018;

/// Check if a VID/PID pair is the default relay board
#[inline]
pub fn is_relay_board(vid: u16, pid: u16) -> bool {
    vid == VENDOR_ID && pid == PRODUCT_ID
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_matches() {
        assert!(is_relay_board(0x0519, 0x2018));
    }

    #[test]
    fn test_other_ids_do_not_match() {
        assert!(!is_relay_board(0x0519, 0x2019));
        assert!(!is_relay_board(0x3151, 0x2018));
        assert!(!is_relay_board(0x0000, 0x0000));
    }
}
