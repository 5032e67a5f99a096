//! In-process backends for tests.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{BackendError, Backends, DiagramRenderer, TemplateConverter};

/// Bytes written by [`StubBackend::Succeed`] renders.
pub const STUB_PNG: &[u8] = b"\x89PNG\r\n\x1a\nstub";

/// Description document written by [`StubBackend::Succeed`] conversions.
pub const STUB_DESCRIPTION: &str = "Diagram:\n  Resources:\n    Canvas:\n      Type: AWS::Diagram::Canvas\n";

/// Behaviour of a stub backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubBackend {
    /// Write the expected artifacts and succeed.
    Succeed,
    /// Write nothing and return an error.
    Fail,
    /// Write nothing and return success anyway.
    SilentNoOutput,
    /// Write part of the output, then panic.
    Panic,
    /// Create every expected file, but leave them empty.
    EmptyOutput,
}

/// Stub renderer/converter that records the paths it was given.
#[derive(Debug)]
pub struct Stub {
    pub behaviour: StubBackend,
    pub calls: AtomicUsize,
    pub seen: std::sync::Mutex<Vec<std::path::PathBuf>>,
}

impl Stub {
    pub fn new(behaviour: StubBackend) -> Arc<Self> {
        Arc::new(Self {
            behaviour,
            calls: AtomicUsize::new(0),
            seen: std::sync::Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every path handed to the stub, inputs and outputs.
    pub fn seen_paths(&self) -> Vec<std::path::PathBuf> {
        self.seen.lock().unwrap().clone()
    }

    fn record(&self, input: &Path, output: &Path, out: &mut dyn Write) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .extend([input.to_path_buf(), output.to_path_buf()]);
        let _ = writeln!(out, "stub backend chatter");
    }
}

impl DiagramRenderer for Stub {
    fn render(&self, input: &Path, output: &Path, out: &mut dyn Write) -> Result<(), BackendError> {
        self.record(input, output, out);
        assert!(input.is_file(), "renderer input must exist");
        match self.behaviour {
            StubBackend::Succeed => {
                fs::write(output, STUB_PNG)?;
                Ok(())
            }
            StubBackend::Fail => Err(BackendError::failed("stub", "exit status: 1", "bad document")),
            StubBackend::SilentNoOutput => Ok(()),
            StubBackend::Panic => {
                fs::write(output.with_extension("partial"), b"half")?;
                panic!("stub renderer fault");
            }
            StubBackend::EmptyOutput => {
                fs::write(output, b"")?;
                Ok(())
            }
        }
    }
}

impl TemplateConverter for Stub {
    fn convert(&self, template: &Path, output: &Path, out: &mut dyn Write) -> Result<(), BackendError> {
        self.record(template, output, out);
        match self.behaviour {
            StubBackend::Succeed => {
                fs::write(output, STUB_PNG)?;
                fs::write(output.with_extension(self.description_extension()), STUB_DESCRIPTION)?;
                Ok(())
            }
            StubBackend::Fail => Err(BackendError::failed("stub", "exit status: 1", "bad template")),
            StubBackend::SilentNoOutput => {
                // Image only, no description document
                fs::write(output, STUB_PNG)?;
                Ok(())
            }
            StubBackend::Panic => {
                fs::write(output, STUB_PNG)?;
                panic!("stub converter fault");
            }
            StubBackend::EmptyOutput => {
                fs::write(output, b"")?;
                fs::write(output.with_extension(self.description_extension()), "")?;
                Ok(())
            }
        }
    }
}

/// Backends where both roles are served by one stub.
pub fn backends(stub: &Arc<Stub>) -> Backends {
    Backends::new(stub.clone(), stub.clone())
}
