//! Keyboard event construction

use crate::domain::{KeyEventFlags, KeyboardEvent, VirtualKey};

use super::ports::ScanCodeResolver;

/// Build one keyboard event for submission.
///
/// Scan-code resolution runs once per constructed event, immediately
/// before submission, unless the event requests unicode injection,
/// which bypasses virtual-key translation entirely.
pub fn build_event(
    key: VirtualKey,
    flags: KeyEventFlags,
    resolver: &impl ScanCodeResolver,
) -> KeyboardEvent {
    let virtual_key = key.code();
    let scan_code = if flags.contains(KeyEventFlags::UNICODE) {
        0
    } else {
        resolver.resolve(virtual_key)
    };

    KeyboardEvent {
        virtual_key,
        scan_code,
        flags,
    }
}
