//! Transport abstraction layer for USB HID relay boards
//!
//! This crate provides the narrow set of HID operations the relay controller
//! needs: library setup/teardown, enumeration by VID/PID, and a scoped
//! open/write/close cycle per device.
//!
//! - `HidapiTransport` talks to real hardware through `hidapi`
//! - Anything implementing `RelayTransport` can stand in for it (tests, replay)

pub mod device_registry;
pub mod error;
pub mod protocol;
pub mod types;

mod hid;

pub use device_registry::{PRODUCT_ID, VENDOR_ID};
pub use error::TransportError;
pub use hid::HidapiTransport;
pub use protocol::{build_report, WireState, REPORT_SIZE};
pub use types::DeviceDescriptor;

/// The core transport trait - the relay controller only talks to hardware through this
///
/// Calls are strictly sequential. A session calls `init` once, then any number of
/// `enumerate` / `open` / `write` / `close` cycles, then `shutdown` once.
pub trait RelayTransport {
    /// Open device handle
    type Handle;

    /// Initialize the underlying HID library
    fn init(&mut self) -> Result<(), TransportError>;

    /// List all devices matching a VID/PID pair, in the order the library reports them
    ///
    /// Fails with `TransportError::NotInitialized` before `init` or after `shutdown`.
    fn enumerate(
        &mut self,
        vendor_id: u16,
        product_id: u16,
    ) -> Result<Vec<DeviceDescriptor>, TransportError>;

    /// Open the device at `path`
    fn open(&mut self, path: &str) -> Result<Self::Handle, TransportError>;

    /// Write an output report, returning the number of bytes written
    fn write(&mut self, handle: &mut Self::Handle, report: &[u8]) -> Result<usize, TransportError>;

    /// Release a device handle
    fn close(&mut self, handle: Self::Handle);

    /// Tear down the underlying HID library
    fn shutdown(&mut self) -> Result<(), TransportError>;
}
