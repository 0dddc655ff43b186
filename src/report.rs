//! Device listing for the diagnostic stream

use std::io::{self, Write};

use hidrelay_transport::DeviceDescriptor;

/// Write the device count followed by one labeled block per device
pub fn print_device_info<W: Write>(out: &mut W, devices: &[DeviceDescriptor]) -> io::Result<()> {
    writeln!(out, "{} device(s) found", devices.len())?;
    for (i, dev) in devices.iter().enumerate() {
        writeln!(out, "Device {}", i + 1)?;
        writeln!(out, "  type: {:04x} {:04x}", dev.vid(), dev.pid())?;
        writeln!(out, "  path: {}", dev.path())?;
        writeln!(out, "  serial_number: {}", dev.serial().unwrap_or("(none)"))?;
        writeln!(out, "  manufacturer: {}", dev.manufacturer().unwrap_or("(none)"))?;
        writeln!(out, "  product:      {}", dev.product_name().unwrap_or("(none)"))?;
    }
    Ok(())
}
