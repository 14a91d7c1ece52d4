//! Error handling types for callback-bridge
//!
//! Errors produced by the bridge itself: configuration loading and
//! validation. Dispatcher errors never pass through this type; see
//! [`crate::bridge::BridgeError`] for the bounded request path.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-level error type
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration value out of range or otherwise unusable
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Configuration file could not be parsed
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for callback-bridge operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Create a parse error for the given file
    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Error::Parse {
            path: path.into(),
            source,
        }
    }
}
