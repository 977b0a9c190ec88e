//! Synthkey - synthetic keyboard input for Windows
//!
//! This crate wraps the Win32 `SendInput` facility for synthesizing
//! keyboard press/release events and exposes a convenience Alt+Tab
//! gesture that holds the task-switcher overlay open.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Virtual key codes, event flags, and the keyboard event value object
//! - **Application**: Port interfaces (traits), event construction, and the injector
//! - **Infrastructure**: Adapter implementations (SendInput, no-op sink, system clock)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
