//! Safe-execution layer for delegated conversion work.
//!
//! Conversion tools hand documents to an external backend. Everything that
//! keeps such a call from affecting the rest of the server lives here:
//!
//! - `artifact` - per-invocation scratch files deleted on every exit path
//! - `capture` - injected sink for the backend's incidental output
//! - `fault` - panic boundary that turns a fault into a typed outcome
//! - `locator` - naming convention for secondary backend artifacts
//! - `diagnostics` - optional debug copies of conversion results

pub mod artifact;
pub mod capture;
pub mod diagnostics;
pub mod fault;
pub mod locator;

pub use artifact::{ArtifactScope, TempArtifact};
pub use capture::OutputCapture;
pub use diagnostics::DebugArtifacts;
pub use fault::{CapturedFault, run_recovering};
pub use locator::secondary_artifact_path;

use std::fmt::Display;
use std::io::Write;
use tracing::{debug, error, trace, warn};

/// How a delegated call ended.
#[derive(Debug)]
pub enum DelegatedOutcome<E> {
    /// The call returned success.
    Completed,

    /// The call returned an error of its own.
    Reported(E),

    /// The call panicked and the fault boundary caught it.
    Faulted(CapturedFault),
}

impl<E> DelegatedOutcome<E> {
    /// Whether the delegated call returned success.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Run a delegated call with its output routed into `capture` and inside the
/// fault boundary. The outcome is logged; callers decide success by checking
/// the artifacts the call was supposed to produce.
pub fn run_delegated<E, F>(label: &str, capture: &mut OutputCapture, call: F) -> DelegatedOutcome<E>
where
    E: Display,
    F: FnOnce(&mut dyn Write) -> Result<(), E>,
{
    let outcome = match run_recovering(label, || capture.run(call)) {
        Ok(Ok(())) => {
            debug!("{} completed", label);
            DelegatedOutcome::Completed
        }
        Ok(Err(e)) => {
            warn!("{} reported failure: {}", label, e);
            DelegatedOutcome::Reported(e)
        }
        Err(fault) => {
            error!("{} aborted: {}", label, fault);
            DelegatedOutcome::Faulted(fault)
        }
    };

    if capture.is_retaining() {
        trace!(
            "{} output ({} bytes): {}",
            label,
            capture.captured().len(),
            String::from_utf8_lossy(capture.captured())
        );
    }

    outcome
}
