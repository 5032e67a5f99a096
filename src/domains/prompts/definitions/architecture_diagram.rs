//! Architecture diagram prompt definition.

use super::{PromptDefinition, argument};
use rmcp::model::PromptArgument;

/// Ask the model to author a diagram description and render it with `dac`.
pub struct ArchitectureDiagramPrompt;

impl PromptDefinition for ArchitectureDiagramPrompt {
    const NAME: &'static str = "architecture_diagram";
    const DESCRIPTION: &'static str =
        "Draft a diagram-as-code document for a system and render it with the dac tool";

    fn template() -> &'static str {
        r#"Create an AWS architecture diagram for the following system:

{{description}}

Write it as a diagram-as-code YAML document: a top-level `Diagram` key holding `DefinitionFiles` and `Resources`, with a `AWS::Diagram::Canvas` resource as the root. The `dac://examples/diagram` resource shows a minimal document.{{#if style}}

Layout preference: {{style}}{{/if}}

Then call the `dac` tool with the document as `content` and show the rendered image. If rendering fails, correct the document and call the tool again."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            argument("description", "The system to draw, in plain words", true),
            argument(
                "style",
                "Optional layout preference, e.g. 'horizontal' or 'group by subnet'",
                false,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_architecture_diagram_metadata() {
        assert_eq!(ArchitectureDiagramPrompt::NAME, "architecture_diagram");

        let args = ArchitectureDiagramPrompt::arguments();
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].name, "description");
        assert_eq!(args[0].required, Some(true));
        assert_eq!(args[1].required, Some(false));
    }

    #[test]
    fn test_template_mentions_tool() {
        assert!(ArchitectureDiagramPrompt::template().contains("`dac`"));
    }
}
