//! Run configuration, built once from the command line

use std::fmt;
use std::str::FromStr;

use hidrelay_transport::{PRODUCT_ID, VENDOR_ID};
use thiserror::Error;

/// A `VID:PID` pair given in hex, e.g. `0519:2018`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceId {
    pub vid: u16,
    pub pid: u16,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid device id {0:?}, expected VID:PID in hex (e.g. 0519:2018)")]
pub struct ParseDeviceIdError(String);

impl FromStr for DeviceId {
    type Err = ParseDeviceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDeviceIdError(s.to_string());
        let (vid, pid) = s.split_once(':').ok_or_else(err)?;
        let parse = |part: &str| {
            let part = part
                .strip_prefix("0x")
                .or_else(|| part.strip_prefix("0X"))
                .unwrap_or(part);
            u16::from_str_radix(part, 16).map_err(|_| err())
        };
        Ok(DeviceId {
            vid: parse(vid)?,
            pid: parse(pid)?,
        })
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}:{:04x}", self.vid, self.pid)
    }
}

/// Everything a session needs to know about the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Vendor ID to enumerate
    pub vendor_id: u16,
    /// Product ID to enumerate
    pub product_id: u16,
    /// Print the device listing and debug logs
    pub verbose: bool,
    /// Requested id override. Accepted but not applied.
    pub device_id: Option<DeviceId>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            vendor_id: VENDOR_ID,
            product_id: PRODUCT_ID,
            verbose: false,
            device_id: None,
        }
    }
}
