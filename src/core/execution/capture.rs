//! Output capture for delegated calls.
//!
//! A backend never writes to the process stdout, which carries the protocol
//! stream. It receives an `OutputCapture` as its writer instead, so each call
//! owns its sink and nothing global is swapped in or restored.

use std::io::{self, Write};

/// Sink handed to a delegated call for its incidental output.
#[derive(Debug, Default)]
pub struct OutputCapture {
    buffer: Vec<u8>,
    retain: bool,
}

impl OutputCapture {
    /// A sink that drops everything written to it.
    pub fn discard() -> Self {
        Self {
            buffer: Vec::new(),
            retain: false,
        }
    }

    /// A sink that keeps everything written to it.
    pub fn retain() -> Self {
        Self {
            buffer: Vec::new(),
            retain: true,
        }
    }

    /// Build a sink from the `retain_backend_output` setting.
    pub fn from_setting(retain: bool) -> Self {
        if retain { Self::retain() } else { Self::discard() }
    }

    /// Whether written bytes are kept.
    pub fn is_retaining(&self) -> bool {
        self.retain
    }

    /// Run `f` with this capture as its output sink.
    pub fn run<T>(&mut self, f: impl FnOnce(&mut dyn Write) -> T) -> T {
        f(self)
    }

    /// Bytes written so far (always empty when discarding).
    pub fn captured(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume the capture and return the retained bytes.
    pub fn into_captured(self) -> Vec<u8> {
        self.buffer
    }
}

impl Write for OutputCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.retain {
            self.buffer.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discard_drops_output() {
        let mut capture = OutputCapture::discard();
        let written = capture.run(|out| out.write(b"render log line\n").unwrap());
        assert_eq!(written, 16);
        assert!(capture.captured().is_empty());
    }

    #[test]
    fn test_retain_keeps_output() {
        let mut capture = OutputCapture::retain();
        capture.run(|out| {
            write!(out, "step 1;").unwrap();
            write!(out, "step 2").unwrap();
        });
        assert_eq!(capture.captured(), b"step 1;step 2");
    }

    #[test]
    fn test_from_setting() {
        assert!(OutputCapture::from_setting(true).is_retaining());
        assert!(!OutputCapture::from_setting(false).is_retaining());
    }

    #[test]
    fn test_run_returns_closure_value() {
        let mut capture = OutputCapture::discard();
        let value = capture.run(|_| 42);
        assert_eq!(value, 42);
    }
}
