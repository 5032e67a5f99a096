//! One file per published resource.

mod example_diagram;
mod example_template;
mod server_info;

pub use example_diagram::{EXAMPLE_DIAGRAM, ExampleDiagramResource};
pub use example_template::{EXAMPLE_CFN_TEMPLATE, ExampleTemplateResource};
pub use server_info::ServerInfoResource;

use super::service::ResourceBody;

/// A resource the catalog can publish.
pub trait ResourceDefinition {
    /// `dac://` address clients read.
    const URI: &'static str;
    const NAME: &'static str;
    const DESCRIPTION: &'static str;
    const MIME_TYPE: &'static str;

    fn body() -> ResourceBody;
}
