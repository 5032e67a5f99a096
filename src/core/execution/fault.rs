//! Fault boundary around delegated calls.
//!
//! A panic inside the wrapped closure is caught here and returned as a
//! `CapturedFault`; it never unwinds into the tool handler or the runtime.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// A panic intercepted by [`run_recovering`].
#[derive(Debug, Clone)]
pub struct CapturedFault {
    label: String,
    message: String,
}

impl CapturedFault {
    /// Name of the call that faulted.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The panic message, when the payload carried one.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CapturedFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} panicked: {}", self.label, self.message)
    }
}

impl std::error::Error for CapturedFault {}

/// Run `f`, converting a panic into `Err(CapturedFault)`.
///
/// The closure is asserted unwind-safe: callers only hand in state that is
/// discarded or re-validated after a fault (scratch files, output sinks).
pub fn run_recovering<T, F>(label: &str, f: F) -> Result<T, CapturedFault>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| CapturedFault {
        label: label.to_string(),
        message: panic_message(payload.as_ref()),
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
