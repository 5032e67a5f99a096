//! Listing and reading the resource catalog.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::core::config::Config;

/// Where a resource's text comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceBody {
    /// Fixed text compiled into the binary.
    Static(&'static str),

    /// JSON description of the running server, built on every read.
    ServerInfo,
}

/// A catalog entry: what `resources/list` shows plus how to produce the body.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    pub resource: Resource,
    pub body: ResourceBody,
}

impl ResourceEntry {
    pub fn uri(&self) -> &str {
        self.resource.raw.uri.as_str()
    }
}

pub struct ResourceService {
    config: Arc<Config>,
    /// Reported by `dac://server/info`.
    tool_names: Vec<String>,
    catalog: BTreeMap<String, ResourceEntry>,
}

impl ResourceService {
    /// Catalog of every registered resource. `tool_names` is what the server
    /// info resource reports as available.
    pub fn new<I, S>(config: Arc<Config>, tool_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let catalog: BTreeMap<_, _> = get_all_resources()
            .into_iter()
            .map(|entry| (entry.uri().to_string(), entry))
            .collect();
        debug!("Resource catalog: {:?}", catalog.keys().collect::<Vec<_>>());

        Self {
            config,
            tool_names: tool_names.into_iter().map(Into::into).collect(),
            catalog,
        }
    }

    /// Descriptors ordered by URI.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.catalog.values().map(|e| e.resource.clone()).collect()
    }

    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .catalog
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let text = match entry.body {
            ResourceBody::Static(text) => text.to_string(),
            ResourceBody::ServerInfo => self.server_info()?,
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }

    fn server_info(&self) -> Result<String, ResourceError> {
        let info = serde_json::json!({
            "server": self.config.server.name,
            "version": self.config.server.version,
            "backend": self.config.converter.awsdac_path.display().to_string(),
            "tools": self.tool_names,
        });
        Ok(serde_json::to_string_pretty(&info)?)
    }
}
