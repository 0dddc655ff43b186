//! Blocking hold between the ON and OFF phases of a toggle

use std::time::Duration;

/// How long a toggle keeps the relays on
pub const TOGGLE_HOLD: Duration = Duration::from_secs(2);

/// A blocking, non-cancellable wait
pub trait Hold {
    fn hold(&mut self, duration: Duration);
}

/// Holds by sleeping the calling thread
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleep;

impl Hold for ThreadSleep {
    fn hold(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
