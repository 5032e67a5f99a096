//! Prompt template rendering.
//!
//! Templates support two constructs:
//! - `{{name}}` is replaced by the argument value, or nothing when unset
//! - `{{#if name}}...{{else}}...{{/if}}` picks a branch on whether `name` is
//!   set and non-empty (the `{{else}}` part is optional; blocks do not nest)
//!
//! Rendering is a single pass over the template, so argument values are
//! inserted verbatim even when they contain braces.

use rmcp::model::{Prompt, PromptArgument};
use std::collections::HashMap;

use super::error::PromptError;

const IF_PREFIX: &str = "#if ";
const ELSE_TAG: &str = "{{else}}";
const ENDIF_TAG: &str = "{{/if}}";

/// A named template together with the arguments it declares.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<PromptArgument>,
    pub template: String,
}

impl PromptTemplate {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
        }
    }

    /// Descriptor advertised by `prompts/list`.
    pub fn to_prompt(&self) -> Prompt {
        Prompt {
            name: self.name.clone(),
            title: None,
            description: self.description.clone(),
            arguments: Some(self.arguments.clone()),
            icons: None,
            meta: None,
        }
    }

    /// Names of the required arguments that are absent or empty.
    pub fn missing_arguments<'a>(&'a self, arguments: &HashMap<String, String>) -> Vec<&'a str> {
        self.arguments
            .iter()
            .filter(|arg| arg.required.unwrap_or(false) && !is_set(arguments, &arg.name))
            .map(|arg| arg.name.as_str())
            .collect()
    }

    /// Substitute `arguments` into the template.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut out = String::with_capacity(self.template.len());
        render_into(&self.template, arguments, &mut out)?;
        Ok(out)
    }
}

fn is_set(arguments: &HashMap<String, String>, name: &str) -> bool {
    arguments.get(name).is_some_and(|v| !v.trim().is_empty())
}

fn render_into(
    mut rest: &str,
    arguments: &HashMap<String, String>,
    out: &mut String,
) -> Result<(), PromptError> {
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);

        let after = &rest[open + 2..];
        let close = after
            .find("}}")
            .ok_or_else(|| PromptError::syntax("Unclosed {{ tag"))?;
        let tag = after[..close].trim();
        rest = &after[close + 2..];

        if let Some(name) = tag.strip_prefix(IF_PREFIX) {
            let end = rest
                .find(ENDIF_TAG)
                .ok_or_else(|| PromptError::syntax(format!("Missing {{{{/if}}}} for '{}'", name.trim())))?;
            let block = &rest[..end];
            let (when_set, otherwise) = block.split_once(ELSE_TAG).unwrap_or((block, ""));

            let branch = if is_set(arguments, name.trim()) { when_set } else { otherwise };
            render_into(branch, arguments, out)?;
            rest = &rest[end + ENDIF_TAG.len()..];
        } else if tag == "else" || tag == "/if" {
            return Err(PromptError::syntax(format!("Unexpected {{{{{}}}}}", tag)));
        } else if let Some(value) = arguments.get(tag) {
            out.push_str(value);
        }
    }

    out.push_str(rest);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn render(template: &str, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        PromptTemplate::new("test", None, vec![], template).render(arguments)
    }

    #[test]
    fn test_simple_substitution() {
        let result = render("Hello, {{name}}!", &args(&[("name", "World")])).unwrap();
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_unset_placeholder_renders_empty() {
        assert_eq!(render("[{{missing}}]", &args(&[])).unwrap(), "[]");
    }

    #[test]
    fn test_conditional_with_value() {
        let template = "Render{{#if style}} in {{style}} style{{/if}}.";
        let result = render(template, &args(&[("style", "compact")])).unwrap();
        assert_eq!(result, "Render in compact style.");
    }

    #[test]
    fn test_conditional_without_value() {
        let template = "Render{{#if style}} in {{style}} style{{/if}}.";
        assert_eq!(render(template, &args(&[])).unwrap(), "Render.");
        assert_eq!(render(template, &args(&[("style", "  ")])).unwrap(), "Render.");
    }

    #[test]
    fn test_conditional_with_else() {
        let template = "Layout: {{#if style}}{{style}}{{else}}default{{/if}}";
        assert_eq!(render(template, &args(&[])).unwrap(), "Layout: default");
    }

    #[test]
    fn test_values_are_inserted_verbatim() {
        let template = "```yaml\n{{template}}\n```";
        let body = "Value: !Sub '{{resolve:ssm:/app/name}}'";
        let result = render(template, &args(&[("template", body)])).unwrap();
        assert_eq!(result, format!("```yaml\n{}\n```", body));
    }

    #[test]
    fn test_malformed_templates() {
        assert!(render("Hello {{name", &args(&[])).is_err());
        assert!(render("{{#if style}}no end", &args(&[])).is_err());
        assert!(render("stray {{/if}}", &args(&[])).is_err());
    }

    #[test]
    fn test_missing_arguments() {
        let template = PromptTemplate::new(
            "test",
            None,
            vec![
                PromptArgument {
                    name: "description".to_string(),
                    title: None,
                    description: None,
                    required: Some(true),
                },
                PromptArgument {
                    name: "style".to_string(),
                    title: None,
                    description: None,
                    required: Some(false),
                },
            ],
            "{{description}}",
        );

        assert_eq!(template.missing_arguments(&args(&[])), vec!["description"]);
        assert_eq!(template.missing_arguments(&args(&[("description", "")])), vec!["description"]);
        assert!(template.missing_arguments(&args(&[("description", "a VPC")])).is_empty());
    }
}
