//! Application layer - Injection use case and port interfaces
//!
//! Contains the core injection operations and trait definitions
//! for the OS boundary.

pub mod events;
pub mod injector;
pub mod ports;

// Re-export common types
pub use events::build_event;
pub use injector::{InputInjector, ALT_TAB_HOLD, TAP_INTERVAL};
