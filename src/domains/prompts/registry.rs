//! The fixed list of prompts the server offers.

use super::definitions::{ArchitectureDiagramPrompt, ExplainTemplatePrompt, PromptDefinition};
use super::templates::PromptTemplate;

fn template<P: PromptDefinition>() -> PromptTemplate {
    PromptTemplate::new(
        P::NAME,
        Some(P::DESCRIPTION.to_string()),
        P::arguments(),
        P::template(),
    )
}

pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![
        template::<ArchitectureDiagramPrompt>(),
        template::<ExplainTemplatePrompt>(),
    ]
}

pub fn prompt_names() -> Vec<&'static str> {
    vec![ArchitectureDiagramPrompt::NAME, ExplainTemplatePrompt::NAME]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_registration_order_matches_names() {
        let names: Vec<_> = get_all_prompts().into_iter().map(|p| p.name).collect();
        assert_eq!(names, prompt_names());
    }

    #[test]
    fn test_every_template_renders_with_required_arguments() {
        for prompt in get_all_prompts() {
            let arguments: HashMap<String, String> = prompt
                .arguments
                .iter()
                .filter(|a| a.required == Some(true))
                .map(|a| (a.name.clone(), "value".to_string()))
                .collect();
            assert!(prompt.missing_arguments(&arguments).is_empty());
            assert!(prompt.render(&arguments).is_ok(), "{} failed to render", prompt.name);
        }
    }
}
