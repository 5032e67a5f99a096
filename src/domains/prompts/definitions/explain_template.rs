//! Explain template prompt definition.

use super::{PromptDefinition, argument};
use rmcp::model::PromptArgument;

/// Ask the model to convert a CloudFormation template with `cfn` and explain it.
pub struct ExplainTemplatePrompt;

impl PromptDefinition for ExplainTemplatePrompt {
    const NAME: &'static str = "explain_template";
    const DESCRIPTION: &'static str =
        "Convert a CloudFormation template with the cfn tool and explain the resulting architecture";

    fn template() -> &'static str {
        r#"Here is a CloudFormation template:

```yaml
{{template}}
```

Call the `cfn` tool with this template as `content` to obtain its diagram-as-code description. Then explain the architecture the description shows, walking through how the resources connect. Point out anything that looks misconfigured."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![argument(
            "template",
            "CloudFormation template body (YAML or JSON)",
            true,
        )]
    }
}
