//! Resource catalog.
//!
//! Read-only documents addressed by `dac://` URIs: a live description of the
//! server and example inputs for `dac` and `cfn`. Static documents are
//! constants in `definitions/`; generated ones are resolved by the service
//! at read time.

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::{get_all_resources, resource_uris};
pub use service::{ResourceBody, ResourceEntry, ResourceService};
