//! Recording fakes for the HID transport and the toggle hold.
//!
//! Both fakes push into one shared event log so tests can check the exact
//! interleaving of opens, writes, closes and holds.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::time::Duration;

use hidrelay::{DeviceDescriptor, Hold, RelayTransport, TransportError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Init,
    Enumerate(u16, u16),
    Open(String),
    Write(String, Vec<u8>),
    Close(String),
    Hold(Duration),
    Shutdown,
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// `n` relay boards at `/dev/hidraw0..n`
pub fn boards(n: usize) -> Vec<DeviceDescriptor> {
    (0..n)
        .map(|i| DeviceDescriptor::new(0x0519, 0x2018, format!("/dev/hidraw{i}")))
        .collect()
}

pub struct FakeHandle {
    path: String,
}

pub struct FakeTransport {
    log: Log,
    devices: Vec<DeviceDescriptor>,
    initialized: bool,
    fail_init: bool,
    fail_shutdown: bool,
    fail_open: HashSet<String>,
    fail_write: HashSet<String>,
}

impl FakeTransport {
    pub fn new(log: &Log, devices: Vec<DeviceDescriptor>) -> Self {
        Self {
            log: Rc::clone(log),
            devices,
            initialized: false,
            fail_init: false,
            fail_shutdown: false,
            fail_open: HashSet::new(),
            fail_write: HashSet::new(),
        }
    }

    /// A transport that has already been through `init`
    pub fn ready(log: &Log, devices: Vec<DeviceDescriptor>) -> Self {
        let mut transport = Self::new(log, devices);
        transport.initialized = true;
        transport
    }

    pub fn failing_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    pub fn failing_shutdown(mut self) -> Self {
        self.fail_shutdown = true;
        self
    }

    pub fn failing_open(mut self, path: &str) -> Self {
        self.fail_open.insert(path.to_string());
        self
    }

    pub fn failing_write(mut self, path: &str) -> Self {
        self.fail_write.insert(path.to_string());
        self
    }

    fn record(&self, event: Event) {
        self.log.borrow_mut().push(event);
    }
}

impl RelayTransport for FakeTransport {
    type Handle = FakeHandle;

    fn init(&mut self) -> Result<(), TransportError> {
        self.record(Event::Init);
        if self.fail_init {
            return Err(TransportError::HidError("hid_init failed".into()));
        }
        self.initialized = true;
        Ok(())
    }

    fn enumerate(
        &mut self,
        vendor_id: u16,
        product_id: u16,
    ) -> Result<Vec<DeviceDescriptor>, TransportError> {
        if !self.initialized {
            return Err(TransportError::NotInitialized);
        }
        self.record(Event::Enumerate(vendor_id, product_id));
        Ok(self
            .devices
            .iter()
            .filter(|d| d.vid() == vendor_id && d.pid() == product_id)
            .cloned()
            .collect())
    }

    fn open(&mut self, path: &str) -> Result<FakeHandle, TransportError> {
        if self.fail_open.contains(path) {
            return Err(TransportError::HidPermissionDenied(path.to_string()));
        }
        self.record(Event::Open(path.to_string()));
        Ok(FakeHandle {
            path: path.to_string(),
        })
    }

    fn write(&mut self, handle: &mut FakeHandle, report: &[u8]) -> Result<usize, TransportError> {
        self.record(Event::Write(handle.path.clone(), report.to_vec()));
        if self.fail_write.contains(&handle.path) {
            return Err(TransportError::HidError("hid_write: I/O error".into()));
        }
        Ok(report.len())
    }

    fn close(&mut self, handle: FakeHandle) {
        self.record(Event::Close(handle.path));
    }

    fn shutdown(&mut self) -> Result<(), TransportError> {
        self.record(Event::Shutdown);
        self.initialized = false;
        if self.fail_shutdown {
            return Err(TransportError::HidError("hid_exit failed".into()));
        }
        Ok(())
    }
}

/// Hold that records the requested duration instead of sleeping
pub struct FakeHold {
    log: Log,
}

impl FakeHold {
    pub fn new(log: &Log) -> Self {
        Self {
            log: Rc::clone(log),
        }
    }
}

impl Hold for FakeHold {
    fn hold(&mut self, duration: Duration) {
        self.log.borrow_mut().push(Event::Hold(duration));
    }
}

/// All write attempts as (path, state byte)
pub fn writes(log: &Log) -> Vec<(String, u8)> {
    log.borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Write(path, report) => Some((path.clone(), report[0])),
            _ => None,
        })
        .collect()
}

pub fn count(log: &Log, pred: impl Fn(&Event) -> bool) -> usize {
    log.borrow().iter().filter(|e| pred(e)).count()
}
