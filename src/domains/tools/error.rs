//! Tool-specific error types.

use std::io;
use thiserror::Error;

use crate::core::security::PathSecurityError;

/// Errors that can occur while handling a tool call.
///
/// None of these escape a handler: each one becomes an error result.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// Arguments did not match the tool's schema.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A scratch-file or input-file operation failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// A caller-supplied path was rejected.
    #[error("{context}: {source}")]
    Path {
        context: String,
        #[source]
        source: PathSecurityError,
    },

    /// The backend did not produce the expected artifact.
    #[error("{0}")]
    ConversionFailed(String),

    /// A reported, handler-specific condition.
    #[error("{0}")]
    Domain(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a path rejection error with context.
    pub fn path(context: impl Into<String>, source: PathSecurityError) -> Self {
        Self::Path {
            context: context.into(),
            source,
        }
    }

    /// Create a new "conversion failed" error.
    pub fn conversion(msg: impl Into<String>) -> Self {
        Self::ConversionFailed(msg.into())
    }

    /// Create a new domain error.
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }
}
