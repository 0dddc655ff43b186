//! Session lifecycle: transport setup, enumeration, fan-out, teardown
//!
//! A session moves `Uninitialized -> Ready -> Closed` and never back. The
//! transport is shut down exactly once after a successful init, either by
//! `close` or when the session is dropped.

use std::io;

use hidrelay_transport::device_registry::is_relay_board;
use hidrelay_transport::{DeviceDescriptor, RelayTransport};
use tracing::{debug, error, warn};

use crate::config::RelayConfig;
use crate::controller::{DeviceOutcome, FanOut, RelayCommand};
use crate::error::RelayError;
use crate::hold::{Hold, ThreadSleep};
use crate::report::print_device_info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Ready,
    Closed,
}

/// What a run should do once devices are enumerated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Switch every matching board
    Apply(RelayCommand),
    /// Print the matching boards without writing to them
    List,
}

/// Devices seen and per-device outcomes of one run
#[derive(Debug, Default)]
pub struct RunReport {
    pub devices: Vec<DeviceDescriptor>,
    pub outcomes: Vec<DeviceOutcome>,
}

impl RunReport {
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(DeviceOutcome::is_success)
    }

    pub fn failures(&self) -> impl Iterator<Item = &DeviceOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }
}

pub struct Session<T: RelayTransport, H: Hold = ThreadSleep> {
    transport: T,
    fan_out: FanOut<H>,
    state: SessionState,
}

impl<T: RelayTransport> Session<T> {
    pub fn new(transport: T) -> Self {
        Self::with_hold(transport, ThreadSleep)
    }

    /// Create a session and initialize its transport
    pub fn open(transport: T) -> Result<Self, RelayError> {
        let mut session = Self::new(transport);
        session.init()?;
        Ok(session)
    }
}

impl<T: RelayTransport, H: Hold> Session<T, H> {
    pub fn with_hold(transport: T, hold: H) -> Self {
        Self {
            transport,
            fan_out: FanOut::new(hold),
            state: SessionState::Uninitialized,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Initialize the transport. A closed session cannot be reopened.
    pub fn init(&mut self) -> Result<(), RelayError> {
        match self.state {
            SessionState::Ready => Ok(()),
            SessionState::Closed => Err(RelayError::TransportNotInitialized),
            SessionState::Uninitialized => {
                self.transport
                    .init()
                    .map_err(RelayError::TransportInitFailed)?;
                self.state = SessionState::Ready;
                debug!("Session ready");
                Ok(())
            }
        }
    }

    fn query(&mut self, config: &RelayConfig) -> Result<Vec<DeviceDescriptor>, RelayError> {
        if self.state != SessionState::Ready {
            return Err(RelayError::TransportNotInitialized);
        }
        self.transport
            .enumerate(config.vendor_id, config.product_id)
            .map_err(RelayError::from_enumeration)
    }

    /// List matching devices, printing them to stderr when verbose
    pub fn enumerate(&mut self, config: &RelayConfig) -> Result<Vec<DeviceDescriptor>, RelayError> {
        let devices = self.query(config)?;
        if config.verbose {
            emit_listing(&devices);
        }
        Ok(devices)
    }

    /// List matching devices and always print them
    pub fn list(&mut self, config: &RelayConfig) -> Result<RunReport, RelayError> {
        let devices = self.query(config)?;
        emit_listing(&devices);
        Ok(RunReport {
            devices,
            outcomes: Vec::new(),
        })
    }

    /// Enumerate and apply `command` to every device found
    ///
    /// Zero devices is an error and nothing is written. Per-device failures
    /// end up in the report, not in the error.
    pub fn run(
        &mut self,
        config: &RelayConfig,
        command: RelayCommand,
    ) -> Result<RunReport, RelayError> {
        let devices = self.enumerate(config)?;
        if devices.is_empty() {
            return Err(RelayError::NoDevicesFound {
                vid: config.vendor_id,
                pid: config.product_id,
            });
        }

        debug!("Applying {} to {} device(s)", command, devices.len());
        let outcomes = self.fan_out.apply(&mut self.transport, &devices, command);
        Ok(RunReport { devices, outcomes })
    }

    /// Shut the transport down and end the session
    pub fn close(mut self) -> Result<(), RelayError> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<(), RelayError> {
        let was_ready = self.state == SessionState::Ready;
        self.state = SessionState::Closed;
        if !was_ready {
            return Ok(());
        }
        debug!("Closing session");
        self.transport
            .shutdown()
            .map_err(RelayError::TransportShutdownFailed)
    }
}

impl<T: RelayTransport, H: Hold> Drop for Session<T, H> {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            error!("{}", e);
        }
    }
}

fn emit_listing(devices: &[DeviceDescriptor]) {
    if let Err(e) = print_device_info(&mut io::stderr().lock(), devices) {
        debug!("Failed to write device listing: {}", e);
    }
}

/// Run one complete session: init, enumerate, act, teardown
///
/// Teardown is attempted whatever happened before it. A teardown failure only
/// becomes the result when everything before it succeeded.
pub fn execute<T: RelayTransport, H: Hold>(
    transport: T,
    hold: H,
    config: &RelayConfig,
    request: Request,
) -> Result<RunReport, RelayError> {
    let mut session = Session::with_hold(transport, hold);
    session.init()?;

    if !is_relay_board(config.vendor_id, config.product_id) {
        warn!(
            "{:04x}:{:04x} is not a known relay board id",
            config.vendor_id, config.product_id
        );
    }
    if let Some(id) = config.device_id {
        warn!(
            "Device id override {} is not supported, using {:04x}:{:04x}",
            id, config.vendor_id, config.product_id
        );
    }

    let outcome = match request {
        Request::Apply(command) => session.run(config, command),
        Request::List => session.list(config),
    };
    let closed = session.close();

    match (outcome, closed) {
        (Ok(report), closed) => closed.map(|()| report),
        (Err(e), Err(close_err)) => {
            error!("{}", close_err);
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
    }
}
