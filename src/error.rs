//! Error taxonomy for the simulation core.
//!
//! Two categories cover every failure the core can produce:
//!
//! - `InvalidArgument`: the caller asked for something impossible (bad game
//!   count, malformed outcome). The message is safe to surface verbatim.
//! - `Internal`: an unexpected fault (e.g. a poisoned lock). The detail is
//!   for logs only; callers surface [`SimError::public_message`] instead.

use thiserror::Error;

/// Errors produced by the simulation runner, aggregator, and service facade.
#[derive(Debug, Error)]
pub enum SimError {
    /// The caller supplied an invalid argument. Safe to show to clients.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Unexpected internal fault. Log the detail, never surface it.
    #[error("internal fault: {0}")]
    Internal(String),
}

impl SimError {
    /// Shorthand for an `InvalidArgument` error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Shorthand for an `Internal` error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Check whether this error was caused by the caller.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Message safe to return to a client.
    ///
    /// Invalid arguments carry their explanation; internal faults collapse
    /// to a generic string so no internals leak across the transport.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::InvalidArgument(msg) => format!("invalid argument: {msg}"),
            Self::Internal(_) => "internal error".to_string(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimError>;
