//! Optional debug copies of conversion results.
//!
//! Writes are best-effort: a failure is logged and never reaches the caller.

use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::core::config::DiagnosticsConfig;

/// File name of the debug copy of the last `dac` payload.
pub const DAC_DEBUG_FILE: &str = "dac_output.base64";

/// File name of the debug copy of the last `cfn` document.
pub const CFN_DEBUG_FILE: &str = "cfn_output.yaml";

/// Destination for debug copies, disabled when no directory is configured.
#[derive(Debug, Clone, Default)]
pub struct DebugArtifacts {
    dir: Option<PathBuf>,
}

impl DebugArtifacts {
    /// Build from the diagnostics configuration.
    pub fn new(config: &DiagnosticsConfig) -> Self {
        Self {
            dir: config.debug_dir.clone(),
        }
    }

    /// A sink that never writes.
    pub fn disabled() -> Self {
        Self { dir: None }
    }

    /// Persist `contents` as `name` in the debug directory.
    ///
    /// Returns the written path, or `None` when disabled or on failure.
    pub fn persist(&self, name: &str, contents: &[u8]) -> Option<PathBuf> {
        let dir = self.dir.as_ref()?;
        let path = dir.join(name);

        if let Err(e) = fs::create_dir_all(dir) {
            warn!("Failed to create debug directory {}: {}", dir.display(), e);
            return None;
        }

        match fs::write(&path, contents) {
            Ok(()) => {
                debug!("Wrote debug copy {}", path.display());
                Some(path)
            }
            Err(e) => {
                warn!("Failed to write debug copy {}: {}", path.display(), e);
                None
            }
        }
    }
}
