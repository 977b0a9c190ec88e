//! Sink factory selecting the injection backend

use std::fmt;

use crate::application::ports::{InjectionError, ScanCodeResolver, SyntheticInputSink};

use super::noop::NoOpSink;
#[cfg(windows)]
use super::send_input::SendInputSink;

/// Available injection backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkBackend {
    /// Native Win32 SendInput
    SendInput,
    /// Discards events (dry run)
    NoOp,
}

impl fmt::Display for SinkBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkBackend::SendInput => write!(f, "sendinput"),
            SinkBackend::NoOp => write!(f, "noop"),
        }
    }
}

/// Create the sink and scan-code resolver for the requested mode.
///
/// Dry runs get the no-op backend on any platform. Otherwise the
/// native SendInput backend is used, which only exists on Windows.
#[allow(clippy::type_complexity)]
pub fn create_sink(
    dry_run: bool,
) -> Result<
    (
        Box<dyn SyntheticInputSink>,
        Box<dyn ScanCodeResolver>,
        SinkBackend,
    ),
    InjectionError,
> {
    if dry_run {
        return Ok((
            Box::new(NoOpSink::new()),
            Box::new(NoOpSink::new()),
            SinkBackend::NoOp,
        ));
    }

    #[cfg(windows)]
    {
        Ok((
            Box::new(SendInputSink::new()),
            Box::new(SendInputSink::new()),
            SinkBackend::SendInput,
        ))
    }

    #[cfg(not(windows))]
    {
        Err(InjectionError::Unsupported)
    }
}
