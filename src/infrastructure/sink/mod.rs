//! Sink infrastructure module
//!
//! Provides the native Windows SendInput backend and a no-op backend
//! for dry runs.

mod factory;
mod noop;
#[cfg(windows)]
mod send_input;

pub use factory::{create_sink, SinkBackend};
pub use noop::NoOpSink;
#[cfg(windows)]
pub use send_input::SendInputSink;
