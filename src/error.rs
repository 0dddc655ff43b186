//! Relay controller error types

use hidrelay_transport::TransportError;
use thiserror::Error;

/// Session-level errors. All of these end the run with a non-zero status.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("HID transport initialization failed: {0}")]
    TransportInitFailed(TransportError),

    #[error("HID transport shutdown failed: {0}")]
    TransportShutdownFailed(TransportError),

    #[error("HID transport not initialized")]
    TransportNotInitialized,

    #[error("Device enumeration failed: {0}")]
    EnumerationFailed(TransportError),

    #[error("No relay board has been found ({vid:04x}:{pid:04x})")]
    NoDevicesFound { vid: u16, pid: u16 },
}

impl RelayError {
    /// Map an enumeration error, keeping the not-initialized case distinct
    pub(crate) fn from_enumeration(e: TransportError) -> Self {
        match e {
            TransportError::NotInitialized => RelayError::TransportNotInitialized,
            other => RelayError::EnumerationFailed(other),
        }
    }
}

/// Per-device failure, recorded without stopping the fan-out
#[derive(Error, Debug)]
pub enum DeviceFailure {
    #[error("unable to open device: {0}")]
    OpenFailed(TransportError),

    #[error("hid_write failed: {0}")]
    WriteFailed(TransportError),
}
