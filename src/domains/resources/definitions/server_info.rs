use super::ResourceDefinition;
use crate::domains::resources::service::ResourceBody;

/// Live description of the server: name, version, the `awsdac` backend in
/// use and the registered tool names.
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "dac://server/info";
    const NAME: &'static str = "Server info";
    const DESCRIPTION: &'static str = "Server version, conversion backend and available tools";
    const MIME_TYPE: &'static str = "application/json";

    fn body() -> ResourceBody {
        ResourceBody::ServerInfo
    }
}
