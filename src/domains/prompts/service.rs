//! Listing and rendering prompts.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;

pub struct PromptService {
    templates: BTreeMap<String, PromptTemplate>,
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptService {
    pub fn new() -> Self {
        let templates: BTreeMap<_, _> = get_all_prompts()
            .into_iter()
            .map(|t| (t.name.clone(), t))
            .collect();
        debug!("Prompt catalog: {:?}", templates.keys().collect::<Vec<_>>());
        Self { templates }
    }

    /// Descriptors ordered by name.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.templates.values().map(PromptTemplate::to_prompt).collect()
    }

    /// Render `name` as a single user message.
    ///
    /// Fails when a required argument is absent or blank; optional ones may
    /// be left out.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let arguments = arguments.unwrap_or_default();
        if let Some(missing) = template.missing_arguments(&arguments).first() {
            warn!("Prompt '{}' requested without '{}'", name, missing);
            return Err(PromptError::missing_argument(*missing));
        }

        let text = template.render(&arguments)?;
        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
        })
    }
}
