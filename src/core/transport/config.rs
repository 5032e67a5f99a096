//! Transport selection and listener settings.

use serde::{Deserialize, Serialize};

/// Which transport the server runs on, with its settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Newline-delimited JSON-RPC on stdin/stdout.
    #[cfg(feature = "stdio")]
    Stdio,

    /// One MCP session per accepted TCP connection.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// Stateless JSON-RPC over HTTP POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// TCP listener settings.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpConfig {
    pub host: String,
    pub port: u16,
}

/// HTTP listener settings.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,

    /// Route that accepts JSON-RPC POSTs.
    pub rpc_path: String,

    /// Answer CORS preflight for any origin.
    pub enable_cors: bool,
}

#[cfg(any(feature = "tcp", feature = "http"))]
const LOOPBACK: &str = "127.0.0.1";

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            host: LOOPBACK.to_string(),
            port: 3000,
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: LOOPBACK.to_string(),
            port: 8080,
            rpc_path: "/mcp".to_string(),
            enable_cors: true,
        }
    }
}

impl Default for TransportConfig {
    /// The first compiled-in transport, in the order stdio, tcp, http.
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            Self::Stdio
        }

        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        {
            Self::Tcp(TcpConfig::default())
        }

        #[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
        {
            Self::Http(HttpConfig::default())
        }

        #[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio, tcp, or http");
        }
    }
}

impl TransportConfig {
    /// Read `MCP_TRANSPORT` and the matching `MCP_TCP_*` / `MCP_HTTP_*`
    /// variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    ///
    /// An unknown or unset `MCP_TRANSPORT`, or one naming a transport that
    /// was not compiled in, selects the default transport. Unparsable ports
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let kind = lookup("MCP_TRANSPORT").unwrap_or_default().to_lowercase();

        match kind.as_str() {
            #[cfg(feature = "tcp")]
            "tcp" => {
                let mut tcp = TcpConfig::default();
                if let Some(host) = lookup("MCP_TCP_HOST") {
                    tcp.host = host;
                }
                if let Some(port) = lookup("MCP_TCP_PORT").and_then(|p| p.parse().ok()) {
                    tcp.port = port;
                }
                Self::Tcp(tcp)
            }
            #[cfg(feature = "http")]
            "http" => {
                let mut http = HttpConfig::default();
                if let Some(host) = lookup("MCP_HTTP_HOST") {
                    http.host = host;
                }
                if let Some(port) = lookup("MCP_HTTP_PORT").and_then(|p| p.parse().ok()) {
                    http.port = port;
                }
                if let Some(path) = lookup("MCP_HTTP_PATH") {
                    http.rpc_path = path;
                }
                if let Some(cors) = lookup("MCP_HTTP_CORS") {
                    http.enable_cors = !(cors == "0" || cors.eq_ignore_ascii_case("false"));
                }
                Self::Http(http)
            }
            _ => Self::default(),
        }
    }

    /// One-line summary for the startup log.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("TCP on {}:{}", cfg.host, cfg.port),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }
}
