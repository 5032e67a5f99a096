//! Diagram rendering tool definition.
//!
//! Renders a diagram-as-code document to PNG through the configured
//! [`DiagramRenderer`](crate::domains::tools::backend::DiagramRenderer).
//!
//! Per call: the document is written to a scratch input file, the renderer
//! is run with its output captured and inside the fault boundary, and the
//! image is read back from a reserved scratch output path. Both files and
//! their scratch directory are gone when the call returns.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::core::execution::diagnostics::DAC_DEBUG_FILE;
use crate::core::execution::{ArtifactScope, run_delegated};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolContext, ToolHandler, parse_arguments, tool_definition};
use crate::domains::tools::result::ToolResult;

const INPUT_NAME: &str = "dac-input.yaml";
const OUTPUT_NAME: &str = "dac-output.png";
const PNG_MIME: &str = "image/png";

/// Parameters for the diagram rendering tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DacParams {
    /// Diagram-as-code document (YAML) to render.
    pub content: String,

    /// Requested output format. Advisory only: the result is always PNG.
    #[serde(rename = "outputFormat", default)]
    pub output_format: Option<String>,
}

/// Diagram rendering tool.
pub struct DacTool {
    context: Arc<ToolContext>,
}

impl DacTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "dac";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Render a diagram-as-code YAML document into a PNG image. \
         Returns the image as base64 content.";

    pub fn new(context: Arc<ToolContext>) -> Self {
        Self { context }
    }

    /// Render `params.content` to PNG.
    ///
    /// A missing output file is a conversion failure whatever the renderer
    /// reported. An output file that exists but is empty is rejected as well
    /// rather than returned as an empty image.
    #[instrument(skip_all, fields(content_len = params.content.len()))]
    pub fn execute(params: &DacParams, context: &ToolContext) -> Result<ToolResult, ToolError> {
        if let Some(format) = params.output_format.as_deref() {
            if !format.eq_ignore_ascii_case("png") {
                warn!("outputFormat '{}' is not supported, rendering PNG", format);
            }
        }

        let scope = ArtifactScope::new(context.scratch_dir())
            .map_err(|e| ToolError::io("Failed to create scratch directory", e))?;
        let input = scope
            .write_input(INPUT_NAME, &params.content)
            .map_err(|e| ToolError::io("Failed to write diagram document", e))?;
        let output = scope
            .reserve(OUTPUT_NAME)
            .map_err(|e| ToolError::io("Failed to reserve diagram output", e))?;

        let renderer = &context.backends.renderer;
        let mut capture = context.output_capture();
        let outcome = run_delegated("diagram renderer", &mut capture, |out| {
            renderer.render(input.path(), output.path(), out)
        });

        if !output.exists() {
            if outcome.is_completed() {
                warn!("Renderer reported success without writing {}", output.path().display());
            }
            return Err(ToolError::conversion(
                "failed to generate diagram: output file not created",
            ));
        }

        let bytes = output
            .read_bytes()
            .map_err(|e| ToolError::io("Failed to read generated diagram", e))?;
        if bytes.is_empty() {
            return Err(ToolError::conversion(
                "failed to generate diagram: output file is empty",
            ));
        }

        let encoded = STANDARD.encode(&bytes);
        context.debug.persist(DAC_DEBUG_FILE, encoded.as_bytes());

        info!("Rendered diagram: {} bytes", bytes.len());
        Ok(ToolResult::image(encoded, PNG_MIME))
    }
}

impl ToolHandler for DacTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn definition(&self) -> Tool {
        tool_definition::<DacParams>(Self::NAME, Self::DESCRIPTION)
    }

    fn call(&self, arguments: serde_json::Value) -> ToolResult {
        ToolResult::from_outcome(
            parse_arguments::<DacParams>(arguments)
                .and_then(|params| Self::execute(&params, &self.context)),
        )
    }
}
