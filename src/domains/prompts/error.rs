use thiserror::Error;

/// Why a prompt could not be produced.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Prompt not found: {0}")]
    NotFound(String),

    /// A required argument was absent or blank.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// The template text itself does not parse.
    #[error("Malformed prompt template: {0}")]
    Syntax(String),
}

impl PromptError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument(name.into())
    }

    pub fn syntax(msg: impl Into<String>) -> Self {
        Self::Syntax(msg.into())
    }
}
