//! Image reader tool definition.
//!
//! Returns a file's bytes as base64 image content, with the MIME type derived
//! from the file extension.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::config::Config;
use crate::core::security::validate_path;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolHandler, parse_arguments, tool_definition};
use crate::domains::tools::result::ToolResult;

const READ_FAILED: &str = "Failed to read image";

/// Parameters for the image tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ImageParams {
    /// Path to the image file to read.
    pub path: String,
}

/// Image tool - reads an image file and returns it base64-encoded.
pub struct ImageTool {
    config: Arc<Config>,
}

impl ImageTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "image";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Read an image file and return it as base64 image content. \
         The MIME type is derived from the extension (.jpg/.jpeg, .gif, .svg, anything else PNG).";

    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    #[instrument(skip_all, fields(path = %params.path))]
    pub fn execute(params: &ImageParams, config: &Config) -> Result<ToolResult, ToolError> {
        let path = validate_path(&params.path, &config.security)
            .map_err(|e| ToolError::path(READ_FAILED, e))?;

        let bytes = fs::read(&path).map_err(|e| ToolError::io(READ_FAILED, e))?;
        let mime_type = mime_type_for(Path::new(&params.path));

        info!("Read {} bytes from {} ({})", bytes.len(), path.display(), mime_type);

        Ok(ToolResult::image(STANDARD.encode(&bytes), mime_type))
    }
}

/// MIME type for an image path, by exact (case-sensitive) extension.
pub fn mime_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        _ => "image/png",
    }
}

impl ToolHandler for ImageTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn definition(&self) -> Tool {
        tool_definition::<ImageParams>(Self::NAME, Self::DESCRIPTION)
    }

    fn call(&self, arguments: serde_json::Value) -> ToolResult {
        ToolResult::from_outcome(
            parse_arguments::<ImageParams>(arguments)
                .and_then(|params| Self::execute(&params, &self.config)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn tool() -> ImageTool {
        ImageTool::new(Arc::new(Config::default()))
    }

    #[test]
    fn test_mime_mapping() {
        assert_eq!(mime_type_for(Path::new("a.jpg")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("a.gif")), "image/gif");
        assert_eq!(mime_type_for(Path::new("a.svg")), "image/svg+xml");
        assert_eq!(mime_type_for(Path::new("a.png")), "image/png");
        assert_eq!(mime_type_for(Path::new("a.webp")), "image/png");
        assert_eq!(mime_type_for(Path::new("no_extension")), "image/png");
    }

    #[test]
    fn test_mime_mapping_is_case_sensitive() {
        assert_eq!(mime_type_for(Path::new("PHOTO.JPG")), "image/png");
        assert_eq!(mime_type_for(Path::new("icon.Svg")), "image/png");
    }

    #[test]
    fn test_reads_and_encodes() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("pixel.gif");
        fs::write(&file, b"GIF89a").unwrap();

        let result = tool().call(json!({ "path": file.to_string_lossy() }));
        assert_eq!(result, ToolResult::image("R0lGODlh", "image/gif"));
    }

    #[test]
    fn test_nonexistent_file() {
        let result = tool().call(json!({ "path": "nonexistent.png" }));
        match result {
            ToolResult::Error(message) => assert!(message.contains("Failed to read image")),
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_is_read_failure() {
        let dir = TempDir::new().unwrap();
        let result = tool().call(json!({ "path": dir.path().to_string_lossy() }));
        match result {
            ToolResult::Error(message) => assert!(message.contains("Failed to read image")),
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_outside_root_is_rejected() {
        let root = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let file = outside.path().join("secret.png");
        fs::write(&file, b"png").unwrap();

        let mut config = Config::default();
        config.security.root_path = Some(root.path().to_path_buf());

        let params = ImageParams {
            path: file.to_string_lossy().to_string(),
        };
        let err = ImageTool::execute(&params, &config).unwrap_err();
        assert!(matches!(err, ToolError::Path { .. }));
        assert!(err.to_string().starts_with("Failed to read image"));
    }

    #[test]
    fn test_missing_path_argument() {
        let result = tool().call(json!({}));
        assert!(result.is_error());
    }
}
