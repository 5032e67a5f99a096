use thiserror::Error;

/// Why a resource read failed.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Generated content could not be serialized.
    #[error("cannot render resource content: {0}")]
    Render(#[from] serde_json::Error),
}

impl ResourceError {
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }
}
