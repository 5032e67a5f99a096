//! Example diagram description resource.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceBody;

/// A minimal diagram description accepted by the `dac` tool.
pub const EXAMPLE_DIAGRAM: &str = r#"Diagram:
  DefinitionFiles:
    - Type: URL
      Url: "https://raw.githubusercontent.com/awslabs/diagram-as-code/main/definitions/definition-for-aws-icons-light.yaml"

  Resources:
    Canvas:
      Type: AWS::Diagram::Canvas
      Direction: vertical
      Children:
        - AWSCloud
    AWSCloud:
      Type: AWS::Diagram::Cloud
      Direction: vertical
      Preset: AWSCloudNoLogo
      Align: center
      Children:
        - AssetsBucket
    AssetsBucket:
      Type: AWS::S3::Bucket
      Preset: Bucket
"#;

/// Example diagram description (static YAML).
pub struct ExampleDiagramResource;

impl ResourceDefinition for ExampleDiagramResource {
    const URI: &'static str = "dac://examples/diagram";
    const NAME: &'static str = "Example Diagram";
    const DESCRIPTION: &'static str = "A minimal diagram-as-code document to pass to the dac tool";
    const MIME_TYPE: &'static str = "application/yaml";

    fn body() -> ResourceBody {
        ResourceBody::Static(EXAMPLE_DIAGRAM)
    }
}
