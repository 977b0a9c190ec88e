//! Clock port interface

use std::time::Duration;

/// Port for the blocking delays between injected events
pub trait Clock: Send + Sync {
    /// Block the calling thread for the given duration.
    fn sleep(&self, duration: Duration);
}

/// Blanket implementation for boxed clock types
impl Clock for Box<dyn Clock> {
    fn sleep(&self, duration: Duration) {
        self.as_ref().sleep(duration)
    }
}
