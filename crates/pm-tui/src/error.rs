//! TUI-specific error types.
//!
//! This module provides the [`TuiError`] type for handling errors
//! that can occur during TUI operations.

use thiserror::Error;

/// Errors that can occur in the TUI.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TuiError {
    /// Terminal initialization or operation failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Event channel was closed unexpectedly.
    #[error("event channel closed unexpectedly")]
    ChannelClosed,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl TuiError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<pm_core::ConfigError> for TuiError {
    fn from(err: pm_core::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
