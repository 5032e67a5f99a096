//! Example CloudFormation template resource.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceBody;

/// A minimal CloudFormation template accepted by the `cfn` tool.
pub const EXAMPLE_CFN_TEMPLATE: &str = r#"AWSTemplateFormatVersion: "2010-09-09"
Description: Static assets bucket behind a CloudFront distribution

Resources:
  AssetsBucket:
    Type: AWS::S3::Bucket

  AssetsDistribution:
    Type: AWS::CloudFront::Distribution
    Properties:
      DistributionConfig:
        Enabled: true
        Origins:
          - Id: assets
            DomainName: !GetAtt AssetsBucket.RegionalDomainName
            S3OriginConfig: {}
        DefaultCacheBehavior:
          TargetOriginId: assets
          ViewerProtocolPolicy: redirect-to-https
          ForwardedValues:
            QueryString: false
"#;

/// Example CloudFormation template (static YAML).
pub struct ExampleTemplateResource;

impl ResourceDefinition for ExampleTemplateResource {
    const URI: &'static str = "dac://examples/cfn-template";
    const NAME: &'static str = "Example CloudFormation Template";
    const DESCRIPTION: &'static str = "A small CloudFormation template to pass to the cfn tool";
    const MIME_TYPE: &'static str = "application/yaml";

    fn body() -> ResourceBody {
        ResourceBody::Static(EXAMPLE_CFN_TEMPLATE)
    }
}
