//! CloudFormation conversion tool definition.
//!
//! Converts a CloudFormation template into a diagram-as-code document
//! through the configured
//! [`TemplateConverter`](crate::domains::tools::backend::TemplateConverter).
//! The converter is handed an image output path and writes the document as
//! a sibling file; its location comes from
//! [`secondary_artifact_path`].

use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::core::execution::diagnostics::CFN_DEBUG_FILE;
use crate::core::execution::{ArtifactScope, run_delegated, secondary_artifact_path};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolContext, ToolHandler, parse_arguments, tool_definition};
use crate::domains::tools::result::ToolResult;

const INPUT_NAME: &str = "cfn-template.yaml";
const OUTPUT_NAME: &str = "cfn-output.png";

/// Parameters for the CloudFormation conversion tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CfnParams {
    /// CloudFormation template (YAML or JSON) to convert.
    pub content: String,
}

/// CloudFormation template to diagram document tool.
pub struct CfnTool {
    context: Arc<ToolContext>,
}

impl CfnTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "cfn";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Convert a CloudFormation template into a diagram-as-code YAML document. \
         The returned document can be edited and rendered with the dac tool.";

    pub fn new(context: Arc<ToolContext>) -> Self {
        Self { context }
    }

    #[instrument(skip_all, fields(content_len = params.content.len()))]
    pub fn execute(params: &CfnParams, context: &ToolContext) -> Result<ToolResult, ToolError> {
        let converter = &context.backends.converter;

        let scope = ArtifactScope::new(context.scratch_dir())
            .map_err(|e| ToolError::io("Failed to create scratch directory", e))?;
        let input = scope
            .write_input(INPUT_NAME, &params.content)
            .map_err(|e| ToolError::io("Failed to write template", e))?;
        let output = scope
            .reserve(OUTPUT_NAME)
            .map_err(|e| ToolError::io("Failed to reserve conversion output", e))?;

        let description_path =
            secondary_artifact_path(output.path(), converter.description_extension());
        let description = if description_path == output.path() {
            None
        } else {
            let name = description_path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| {
                    ToolError::conversion(format!(
                        "failed to convert template: unusable output path: {}",
                        description_path.display()
                    ))
                })?;
            Some(
                scope
                    .reserve(name)
                    .map_err(|e| ToolError::io("Failed to reserve description output", e))?,
            )
        };
        let document = description.as_ref().unwrap_or(&output);

        let mut capture = context.output_capture();
        let outcome = run_delegated("template converter", &mut capture, |out| {
            converter.convert(input.path(), output.path(), out)
        });

        if !document.exists() {
            if outcome.is_completed() {
                warn!("Converter reported success without writing {}", document.path().display());
            }
            return Err(ToolError::conversion(format!(
                "failed to convert template: expected output file not found: {}",
                document.path().display()
            )));
        }

        let text = document
            .read_text()
            .map_err(|e| ToolError::io("Failed to read diagram document", e))?;
        context.debug.persist(CFN_DEBUG_FILE, text.as_bytes());

        info!("Converted template into {} byte diagram document", text.len());
        Ok(ToolResult::text(text))
    }
}

impl ToolHandler for CfnTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn definition(&self) -> Tool {
        tool_definition::<CfnParams>(Self::NAME, Self::DESCRIPTION)
    }

    fn call(&self, arguments: serde_json::Value) -> ToolResult {
        ToolResult::from_outcome(
            parse_arguments::<CfnParams>(arguments)
                .and_then(|params| Self::execute(&params, &self.context)),
        )
    }
}
