//! Error types shared by the feed and the indicator binary.
//!
//! The `IndicatorError` enum unifies the failure cases of a refresh cycle
//! (transport, parsing, arithmetic on upstream values) with the local ones
//! (I/O, channels, user commands), so every source can return a single
//! `Result<T, IndicatorError>` and be combined independently of its siblings.
use std::io;

use thiserror::Error;

/// Coarse grouping of [`IndicatorError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connection failures, timeouts and non-2xx responses.
    Network,
    /// Malformed payloads, missing markers or keys.
    Parse,
    /// Non-numeric or degenerate input to a calculation.
    Computation,
    /// Failures that never left the process.
    Local,
}

/// Unified error type for the workspace.
#[derive(Error, Debug)]
pub enum IndicatorError {
    /// Transport-level failure (DNS, TLS, connect, timeout) for the given URL.
    #[error("Network error for {url}: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Transport error text.
        message: String,
    },

    /// Upstream answered with a non-success status code.
    #[error("Unexpected HTTP status {status} from {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// Numeric HTTP status.
        status: u16,
    },

    /// Failure while decoding JSON via serde_json.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The marker line that precedes an embedded payload was not found.
    #[error("Marker not found: {0}")]
    MissingMarker(String),

    /// A key or record the payload is expected to carry is absent.
    #[error("Missing key: {0}")]
    MissingKey(String),

    /// A value that should be numeric could not be used in a calculation.
    #[error("Computation error: {0}")]
    Computation(String),

    /// I/O error originating from the standard library (stdin, process spawn).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Channel send failed (receiver dropped); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),

    /// A user command could not be understood.
    #[error("Invalid command: {0}")]
    InvalidAction(String),
}

impl IndicatorError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            IndicatorError::Network { .. } | IndicatorError::Status { .. } => ErrorKind::Network,
            IndicatorError::Json(_)
            | IndicatorError::MissingMarker(_)
            | IndicatorError::MissingKey(_) => ErrorKind::Parse,
            IndicatorError::Computation(_) => ErrorKind::Computation,
            IndicatorError::Io(_)
            | IndicatorError::ChannelSend(_)
            | IndicatorError::InvalidAction(_) => ErrorKind::Local,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        let status = IndicatorError::Status {
            url: "https://example.org".into(),
            status: 503,
        };
        assert_eq!(status.kind(), ErrorKind::Network);
        assert_eq!(
            IndicatorError::MissingMarker("__NEXT_DATA__".into()).kind(),
            ErrorKind::Parse
        );
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(IndicatorError::from(json).kind(), ErrorKind::Parse);
        assert_eq!(
            IndicatorError::Computation("ask is zero".into()).kind(),
            ErrorKind::Computation
        );
    }
}
