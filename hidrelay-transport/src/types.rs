//! Common types for transport layer

/// Identification of one enumerated relay board
///
/// Produced by enumeration and never modified afterwards. Use the `with_*`
/// builders only when constructing a descriptor from some other source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDescriptor {
    vid: u16,
    pid: u16,
    path: String,
    serial: Option<String>,
    manufacturer: Option<String>,
    product_name: Option<String>,
}

impl DeviceDescriptor {
    pub fn new(vid: u16, pid: u16, path: impl Into<String>) -> Self {
        Self {
            vid,
            pid,
            path: path.into(),
            serial: None,
            manufacturer: None,
            product_name: None,
        }
    }

    pub fn with_serial(mut self, serial: impl Into<String>) -> Self {
        self.serial = Some(serial.into());
        self
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    pub fn with_product_name(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = Some(product_name.into());
        self
    }

    /// USB Vendor ID
    pub fn vid(&self) -> u16 {
        self.vid
    }

    /// USB Product ID
    pub fn pid(&self) -> u16 {
        self.pid
    }

    /// Platform device path, opaque and unique per device
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Serial number if available
    pub fn serial(&self) -> Option<&str> {
        self.serial.as_deref()
    }

    /// Manufacturer string if available
    pub fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }

    /// Product name if available
    pub fn product_name(&self) -> Option<&str> {
        self.product_name.as_deref()
    }
}

impl From<&hidapi::DeviceInfo> for DeviceDescriptor {
    fn from(info: &hidapi::DeviceInfo) -> Self {
        Self {
            vid: info.vendor_id(),
            pid: info.product_id(),
            path: info.path().to_string_lossy().to_string(),
            serial: info.serial_number().map(|s| s.to_string()),
            manufacturer: info.manufacturer_string().map(|s| s.to_string()),
            product_name: info.product_string().map(|s| s.to_string()),
        }
    }
}
