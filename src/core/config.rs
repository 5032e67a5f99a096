//! Server configuration.
//!
//! Defaults overlaid with `MCP_*` environment variables (a `.env` file is
//! honoured). Loading never fails; [`Config::validate`] checks the result
//! against the filesystem before the server starts.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Conversion backend configuration.
    pub converter: ConverterConfig,

    /// Diagnostic side-channel configuration.
    pub diagnostics: DiagnosticsConfig,

    /// Security and path validation configuration.
    pub security: SecurityConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for the external diagram-as-code backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Path (or bare name resolved via `PATH`) of the `awsdac` executable.
    pub awsdac_path: PathBuf,

    /// Parent directory for per-invocation scratch directories.
    /// Falls back to the system temp directory when unset.
    pub scratch_dir: Option<PathBuf>,

    /// Keep the backend's incidental output in memory and log it at trace level
    /// instead of discarding it.
    pub retain_backend_output: bool,
}

/// Configuration for best-effort debug copies of conversion results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Directory that receives debug copies. Nothing is written when unset.
    pub debug_dir: Option<PathBuf>,
}

/// Configuration for security and path validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Optional root directory for path operations.
    /// If None, no path restrictions are enforced.
    pub root_path: Option<PathBuf>,

    /// Whether to allow symlinks in path validation.
    /// If false, symlinks pointing outside the root are rejected.
    pub allow_symlinks: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            awsdac_path: PathBuf::from("awsdac"),
            scratch_dir: None,
            retain_backend_output: false,
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            root_path: None,
            allow_symlinks: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "dac-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            converter: ConverterConfig::default(),
            diagnostics: DiagnosticsConfig::default(),
            security: SecurityConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment, after applying a
    /// `.env` file when one is present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    ///
    /// Variables are prefixed with `MCP_` (`MCP_AWSDAC_PATH`, `MCP_DEBUG_DIR`,
    /// ...). Unset variables keep their defaults; boolean flags that do not
    /// parse keep theirs too.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let flag = |key: &str, default: bool| {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };

        if let Some(name) = lookup("MCP_SERVER_NAME") {
            config.server.name = name;
        }
        if let Some(level) = lookup("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }
        config.logging.with_timestamps = flag("MCP_LOG_TIMESTAMPS", config.logging.with_timestamps);

        config.transport = TransportConfig::from_lookup(&lookup);

        if let Some(path) = lookup("MCP_AWSDAC_PATH") {
            config.converter.awsdac_path = PathBuf::from(path);
        }
        config.converter.scratch_dir = lookup("MCP_SCRATCH_DIR").map(PathBuf::from);
        config.converter.retain_backend_output = flag(
            "MCP_RETAIN_BACKEND_OUTPUT",
            config.converter.retain_backend_output,
        );

        config.diagnostics.debug_dir = lookup("MCP_DEBUG_DIR").map(PathBuf::from);
        config.security.root_path = lookup("MCP_ROOT_PATH").map(PathBuf::from);
        config.security.allow_symlinks = flag("MCP_ALLOW_SYMLINKS", config.security.allow_symlinks);

        config
    }

    /// Check that configured directories are usable.
    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.converter.scratch_dir {
            if !dir.is_dir() {
                return Err(Error::config(format!(
                    "scratch directory does not exist: {}",
                    dir.display()
                )));
            }
        }

        if let Some(root) = &self.security.root_path {
            if !root.is_dir() {
                return Err(Error::config(format!(
                    "root path is not a directory: {}",
                    root.display()
                )));
            }
        }

        if self.converter.awsdac_path.as_os_str().is_empty() {
            return Err(Error::config("awsdac path must not be empty"));
        }

        Ok(())
    }

    /// Log the settings that change runtime behaviour.
    pub fn log_summary(&self) {
        info!("Conversion backend: {}", self.converter.awsdac_path.display());
        if let Some(dir) = &self.diagnostics.debug_dir {
            info!("Debug copies of conversion results go to {}", dir.display());
        }
        match &self.security.root_path {
            Some(root) => info!("Image reads restricted to {}", root.display()),
            None => warn!("MCP_ROOT_PATH not set, the image tool may read any file the process can access"),
        }
    }
}
