//! One file per prompt.

mod architecture_diagram;
mod explain_template;

pub use architecture_diagram::ArchitectureDiagramPrompt;
pub use explain_template::ExplainTemplatePrompt;

use rmcp::model::PromptArgument;

/// A prompt the catalog can offer.
pub trait PromptDefinition {
    const NAME: &'static str;
    const DESCRIPTION: &'static str;

    /// Template text, see [`crate::domains::prompts::templates`] for syntax.
    fn template() -> &'static str;

    fn arguments() -> Vec<PromptArgument>;
}

pub(crate) fn argument(name: &str, description: &str, required: bool) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(required),
    }
}
