// USB HID relay board controller - shared library
// Device enumeration, per-device writes, fan-out and session lifecycle

pub mod config;
pub mod controller;
pub mod error;
pub mod hold;
pub mod report;
pub mod session;

pub use config::{DeviceId, RelayConfig};
pub use controller::{write_relay, DeviceOutcome, FanOut, RelayCommand};
pub use error::{DeviceFailure, RelayError};
pub use hold::{Hold, ThreadSleep, TOGGLE_HOLD};
pub use session::{execute, Request, RunReport, Session, SessionState};

pub use hidrelay_transport::{
    DeviceDescriptor, HidapiTransport, RelayTransport, TransportError, WireState,
};
