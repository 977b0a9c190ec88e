//! Input injection use case

use std::time::Duration;

use crate::domain::{KeyEventFlags, VirtualKey};

use super::events::build_event;
use super::ports::{Clock, InjectionError, ScanCodeResolver, SyntheticInputSink};

/// Pause between the press and release of a tapped key.
///
/// Accommodates driver-level debouncing and application-level
/// key-repeat detection; slower target applications drop events
/// without it.
pub const TAP_INTERVAL: Duration = Duration::from_millis(40);

/// How long [`InputInjector::alt_tab`] keeps the Alt key held so the
/// task-switcher overlay stays visible.
pub const ALT_TAB_HOLD: Duration = Duration::from_secs(2);

/// Stateless injector submitting one synthetic keyboard event per call.
///
/// Every operation either returns after a single submission or blocks
/// the calling thread for a fixed pause. The injector holds no state
/// between calls; the only shared resource is the global OS keyboard
/// state, which other processes can interleave with during the pauses.
pub struct InputInjector<S, R, C>
where
    S: SyntheticInputSink,
    R: ScanCodeResolver,
    C: Clock,
{
    sink: S,
    resolver: R,
    clock: C,
}

impl<S, R, C> InputInjector<S, R, C>
where
    S: SyntheticInputSink,
    R: ScanCodeResolver,
    C: Clock,
{
    /// Create a new injector over the given sink, resolver, and clock
    pub fn new(sink: S, resolver: R, clock: C) -> Self {
        Self {
            sink,
            resolver,
            clock,
        }
    }

    /// Press a key (key-down only).
    ///
    /// The OS behaves as though the physical key were pressed, visible
    /// to every application with input focus, until a matching
    /// [`release_key`](Self::release_key) is sent. Pairing the two is
    /// the caller's responsibility.
    pub fn press_key(&self, key: VirtualKey) -> Result<(), InjectionError> {
        let event = build_event(key, KeyEventFlags::NONE, &self.resolver);
        self.sink.submit(&[event])?;
        Ok(())
    }

    /// Release a previously pressed key (key-up).
    pub fn release_key(&self, key: VirtualKey) -> Result<(), InjectionError> {
        let event = build_event(key, KeyEventFlags::KEY_UP, &self.resolver);
        self.sink.submit(&[event])?;
        Ok(())
    }

    /// Tap a key: press, pause, release, pause.
    ///
    /// Fails fast: a failed press aborts the tap without attempting
    /// the release.
    pub fn press_and_release(&self, key: VirtualKey) -> Result<(), InjectionError> {
        self.press_key(key)?;
        self.clock.sleep(TAP_INTERVAL);
        self.release_key(key)?;
        self.clock.sleep(TAP_INTERVAL);
        Ok(())
    }

    /// Simulate Alt+Tab: hold Alt, tap Tab, keep Alt down for
    /// [`ALT_TAB_HOLD`] so the task-switcher overlay stays visible,
    /// then release Alt.
    ///
    /// Fails fast on any sub-step. A failure after Alt went down
    /// leaves Alt held; no recovery release is attempted.
    pub fn alt_tab(&self) -> Result<(), InjectionError> {
        self.press_key(VirtualKey::Alt)?;
        self.press_key(VirtualKey::Tab)?;
        self.release_key(VirtualKey::Tab)?;
        self.clock.sleep(ALT_TAB_HOLD);
        self.release_key(VirtualKey::Alt)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::KeyboardEvent;

    // Mock implementations for testing

    struct VecSink {
        submitted: Mutex<Vec<KeyboardEvent>>,
        fail_code: Option<u32>,
    }

    impl VecSink {
        fn new(fail_code: Option<u32>) -> Self {
            Self {
                submitted: Mutex::new(Vec::new()),
                fail_code,
            }
        }
    }

    impl SyntheticInputSink for VecSink {
        fn submit(&self, events: &[KeyboardEvent]) -> Result<usize, InjectionError> {
            self.submitted.lock().unwrap().extend_from_slice(events);
            match self.fail_code {
                Some(code) => Err(InjectionError::Failed {
                    submitted: events.len(),
                    accepted: 0,
                    code,
                }),
                None => Ok(events.len()),
            }
        }
    }

    struct IdentityResolver;

    impl ScanCodeResolver for IdentityResolver {
        fn resolve(&self, virtual_key: u16) -> u16 {
            virtual_key
        }
    }

    struct NoSleepClock;

    impl Clock for NoSleepClock {
        fn sleep(&self, _duration: Duration) {}
    }

    fn injector(
        fail_code: Option<u32>,
    ) -> InputInjector<VecSink, IdentityResolver, NoSleepClock> {
        InputInjector::new(VecSink::new(fail_code), IdentityResolver, NoSleepClock)
    }

    #[test]
    fn press_submits_a_single_key_down_event() {
        let injector = injector(None);
        injector.press_key(VirtualKey::Space).unwrap();

        let events = injector.sink.submitted.lock().unwrap().clone();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].virtual_key, 0x20);
        assert!(!events[0].is_release());
    }

    #[test]
    fn release_sets_the_key_up_flag() {
        let injector = injector(None);
        injector.release_key(VirtualKey::Space).unwrap();

        let events = injector.sink.submitted.lock().unwrap().clone();
        assert_eq!(events.len(), 1);
        assert!(events[0].is_release());
    }

    #[test]
    fn sink_failure_propagates_unchanged() {
        let injector = injector(Some(1400)); // ERROR_INVALID_WINDOW_HANDLE
        let err = injector.press_key(VirtualKey::Alt).unwrap_err();

        match err {
            InjectionError::Failed { code, accepted, .. } => {
                assert_eq!(code, 1400);
                assert_eq!(accepted, 0);
            }
            other => panic!("expected Failed, got {:?}", other),
        }
        // No retry: exactly one submission was attempted.
        assert_eq!(injector.sink.submitted.lock().unwrap().len(), 1);
    }
}
