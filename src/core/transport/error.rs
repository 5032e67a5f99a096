//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Failures that stop a transport. Tool and resource errors never end up
/// here; they are answered inside the session.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The listener address could not be bound.
    #[error("cannot listen on {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The MCP initialization handshake failed.
    #[error("session handshake failed: {0}")]
    Handshake(String),

    /// An established session ended abnormally.
    #[error("session ended abnormally: {0}")]
    Session(String),

    /// The HTTP server stopped with an error.
    #[error("HTTP server stopped: {0}")]
    Http(#[source] std::io::Error),
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    pub fn handshake(cause: impl ToString) -> Self {
        Self::Handshake(cause.to_string())
    }

    pub fn session(cause: impl ToString) -> Self {
        Self::Session(cause.to_string())
    }
}
