//! The fixed list of resources the server publishes.

use rmcp::model::{AnnotateAble, RawResource};

use super::definitions::{
    ExampleDiagramResource, ExampleTemplateResource, ResourceDefinition, ServerInfoResource,
};
use super::service::ResourceEntry;

fn entry<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.mime_type = Some(R::MIME_TYPE.to_string());
    raw.description = Some(R::DESCRIPTION.to_string());
    ResourceEntry {
        resource: raw.no_annotation(),
        body: R::body(),
    }
}

/// Every published resource, in registration order.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        entry::<ServerInfoResource>(),
        entry::<ExampleDiagramResource>(),
        entry::<ExampleTemplateResource>(),
    ]
}

pub fn resource_uris() -> Vec<&'static str> {
    vec![
        ServerInfoResource::URI,
        ExampleDiagramResource::URI,
        ExampleTemplateResource::URI,
    ]
}
