//! Domain error types

use thiserror::Error;

/// Error when a key name cannot be parsed
#[derive(Debug, Clone, Error)]
#[error("Unknown key: \"{input}\". Run 'synthkey keys' to list the supported names")]
pub struct KeyParseError {
    pub input: String,
}
