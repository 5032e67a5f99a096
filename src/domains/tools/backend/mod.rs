//! Conversion backends.
//!
//! The `dac` and `cfn` tools delegate the actual conversion to a backend
//! behind the [`DiagramRenderer`] and [`TemplateConverter`] traits. Every
//! backend call receives a writer for its incidental output; it must not
//! write to the process stdout.

mod awsdac;
#[cfg(test)]
pub mod stub;

pub use awsdac::AwsdacCli;

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::core::config::ConverterConfig;

/// Errors reported by a conversion backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend process could not be started.
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The backend ran and reported failure.
    #[error("{program} exited with {status}: {detail}")]
    Failed {
        program: String,
        status: String,
        detail: String,
    },

    /// Forwarding backend output into the capture sink failed.
    #[error("failed to forward backend output: {0}")]
    Output(#[from] io::Error),
}

impl BackendError {
    /// Create a "failed" error.
    pub fn failed(program: impl Into<String>, status: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Failed {
            program: program.into(),
            status: status.into(),
            detail: detail.into(),
        }
    }
}

/// Renders a diagram description document into a PNG image.
pub trait DiagramRenderer: Send + Sync {
    /// Render the document at `input` into `output`.
    ///
    /// Success is not proof of output: callers check that `output` exists.
    fn render(&self, input: &Path, output: &Path, out: &mut dyn Write) -> Result<(), BackendError>;
}

/// Converts a CloudFormation template into a diagram description document.
pub trait TemplateConverter: Send + Sync {
    /// Convert the template at `template`, given `output` as the image path.
    ///
    /// The description document is written next to `output` with the
    /// extension returned by [`TemplateConverter::description_extension`].
    fn convert(&self, template: &Path, output: &Path, out: &mut dyn Write) -> Result<(), BackendError>;

    /// Extension (without dot) of the description document the converter writes.
    fn description_extension(&self) -> &str {
        "yaml"
    }
}

/// The pair of backends used by the conversion tools.
#[derive(Clone)]
pub struct Backends {
    pub renderer: Arc<dyn DiagramRenderer>,
    pub converter: Arc<dyn TemplateConverter>,
}

impl Backends {
    /// Create from explicit backend implementations.
    pub fn new(renderer: Arc<dyn DiagramRenderer>, converter: Arc<dyn TemplateConverter>) -> Self {
        Self { renderer, converter }
    }

    /// Both backends served by the `awsdac` executable from the configuration.
    pub fn from_config(config: &ConverterConfig) -> Self {
        let cli = Arc::new(AwsdacCli::new(config.awsdac_path.clone()));
        Self {
            renderer: cli.clone(),
            converter: cli,
        }
    }
}

impl std::fmt::Debug for Backends {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backends").finish_non_exhaustive()
    }
}
