//! No-op sink adapter

use crate::application::ports::{InjectionError, ScanCodeResolver, SyntheticInputSink};
use crate::domain::KeyboardEvent;

/// Sink that accepts and discards every event
///
/// Used for dry runs and on hosts without a native injection backend.
pub struct NoOpSink;

impl NoOpSink {
    /// Create a new no-op sink
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpSink {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticInputSink for NoOpSink {
    fn submit(&self, events: &[KeyboardEvent]) -> Result<usize, InjectionError> {
        Ok(events.len())
    }
}

impl ScanCodeResolver for NoOpSink {
    fn resolve(&self, _virtual_key: u16) -> u16 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::KeyEventFlags;

    #[test]
    fn accepts_every_event() {
        let sink = NoOpSink::new();
        let events = [KeyboardEvent {
            virtual_key: 0x09,
            scan_code: 0,
            flags: KeyEventFlags::NONE,
        }];
        assert_eq!(sink.submit(&events).unwrap(), 1);
    }

    #[test]
    fn resolves_every_key_to_zero() {
        let sink = NoOpSink::new();
        assert_eq!(sink.resolve(0x57), 0);
    }
}
