//! Synthetic input sink port interface

use thiserror::Error;

use crate::domain::KeyboardEvent;

/// Injection errors
#[derive(Debug, Clone, Error)]
pub enum InjectionError {
    /// The OS queued fewer events than were submitted.
    #[error("Injection failed: {accepted} of {submitted} events queued (os error {code})")]
    Failed {
        submitted: usize,
        accepted: usize,
        /// Platform last-error code captured when the submission failed
        code: u32,
    },

    #[error("Synthetic keyboard input requires Windows. Use --dry-run on other platforms.")]
    Unsupported,
}

/// Port for submitting synthetic input events to the operating system
pub trait SyntheticInputSink: Send + Sync {
    /// Submit a batch of keyboard events.
    ///
    /// Returns the number of events the OS queued. Implementations must
    /// fail with [`InjectionError::Failed`] when the OS queues fewer
    /// events than were submitted, capturing the platform last-error
    /// code at that moment.
    fn submit(&self, events: &[KeyboardEvent]) -> Result<usize, InjectionError>;
}

/// Blanket implementation for boxed sink types
impl SyntheticInputSink for Box<dyn SyntheticInputSink> {
    fn submit(&self, events: &[KeyboardEvent]) -> Result<usize, InjectionError> {
        self.as_ref().submit(events)
    }
}
