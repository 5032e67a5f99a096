//! Typed tool results.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

use super::error::ToolError;

/// Outcome of one tool call. Every handler path ends in one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolResult {
    /// Plain text.
    Text(String),

    /// Base64-encoded image data with its MIME type.
    Image { data: String, mime_type: String },

    /// A failure reported to the caller.
    Error(String),
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn image(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self::Image {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Collapse a handler outcome into a result, logging errors.
    pub fn from_outcome(outcome: Result<ToolResult, ToolError>) -> Self {
        outcome.unwrap_or_else(|e| {
            warn!("{}", e);
            Self::Error(e.to_string())
        })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl From<ToolResult> for CallToolResult {
    fn from(result: ToolResult) -> Self {
        match result {
            ToolResult::Text(text) => CallToolResult::success(vec![Content::text(text)]),
            ToolResult::Image { data, mime_type } => {
                CallToolResult::success(vec![Content::image(data, mime_type)])
            }
            ToolResult::Error(message) => CallToolResult::error(vec![Content::text(message)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn test_from_outcome_error() {
        let result = ToolResult::from_outcome(Err(ToolError::domain("cannot divide by zero")));
        assert_eq!(result, ToolResult::error("cannot divide by zero"));
        assert!(result.is_error());
    }

    #[test]
    fn test_text_into_call_result() {
        let call: CallToolResult = ToolResult::text("5.00").into();
        assert!(!call.is_error.unwrap_or(false));
        match &call.content[0].raw {
            RawContent::Text(text) => assert_eq!(text.text, "5.00"),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_image_into_call_result() {
        let call: CallToolResult = ToolResult::image("aGk=", "image/png").into();
        match &call.content[0].raw {
            RawContent::Image(image) => {
                assert_eq!(image.data, "aGk=");
                assert_eq!(image.mime_type, "image/png");
            }
            _ => panic!("Expected image content"),
        }
    }

    #[test]
    fn test_error_into_call_result() {
        let call: CallToolResult = ToolResult::error("Unknown tool: nope").into();
        assert!(call.is_error.unwrap_or(false));
    }
}
