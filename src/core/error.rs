//! Crate-level error type.
//!
//! Domain errors convert into [`Error`] with `?`. Tool failures normally
//! never get this far: they are reported to the client as error results.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Any failure surfaced by the server outside a tool result.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    #[error("Backend error: {0}")]
    Backend(#[from] crate::domains::tools::backend::BackendError),

    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] crate::domains::prompts::PromptError),

    #[error("Transport error: {0}")]
    Transport(#[from] crate::core::transport::TransportError),

    /// Settings that fail [`Config::validate`](crate::core::Config::validate).
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
