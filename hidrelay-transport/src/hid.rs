//! HID transport implementation over hidapi

use std::ffi::CString;

use hidapi::{HidApi, HidDevice};
use tracing::debug;

use crate::error::TransportError;
use crate::types::DeviceDescriptor;
use crate::RelayTransport;

/// Relay transport backed by the system HID library
///
/// Holds the library context between `init` and `shutdown`.
#[derive(Default)]
pub struct HidapiTransport {
    api: Option<HidApi>,
}

impl HidapiTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn api(&mut self) -> Result<&mut HidApi, TransportError> {
        self.api.as_mut().ok_or(TransportError::NotInitialized)
    }
}

impl RelayTransport for HidapiTransport {
    type Handle = HidDevice;

    fn init(&mut self) -> Result<(), TransportError> {
        if self.api.is_none() {
            // Enumeration is filtered later, skip the full scan here
            self.api = Some(HidApi::new_without_enumerate()?);
            debug!("HID library initialized");
        }
        Ok(())
    }

    fn enumerate(
        &mut self,
        vendor_id: u16,
        product_id: u16,
    ) -> Result<Vec<DeviceDescriptor>, TransportError> {
        let api = self.api()?;
        api.reset_devices()?;
        api.add_devices(vendor_id, product_id)?;

        let devices: Vec<DeviceDescriptor> =
            api.device_list().map(DeviceDescriptor::from).collect();
        debug!(
            "Enumerated {} device(s) for {:04x}:{:04x}",
            devices.len(),
            vendor_id,
            product_id
        );
        Ok(devices)
    }

    fn open(&mut self, path: &str) -> Result<HidDevice, TransportError> {
        let c_path =
            CString::new(path).map_err(|_| TransportError::InvalidPath(path.to_string()))?;
        let device = self.api()?.open_path(&c_path)?;
        Ok(device)
    }

    fn write(&mut self, handle: &mut HidDevice, report: &[u8]) -> Result<usize, TransportError> {
        Ok(handle.write(report)?)
    }

    fn close(&mut self, handle: HidDevice) {
        // hid_close runs when the handle drops
        drop(handle);
    }

    fn shutdown(&mut self) -> Result<(), TransportError> {
        match self.api.take() {
            Some(api) => {
                drop(api);
                debug!("HID library released");
                Ok(())
            }
            None => Err(TransportError::NotInitialized),
        }
    }
}
