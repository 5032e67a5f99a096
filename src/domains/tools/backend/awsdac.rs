//! `awsdac` command-line backend.
//!
//! Drives the awslabs diagram-as-code CLI as a child process. Its stdout and
//! stderr are collected and forwarded into the capture sink, never inherited.

use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

use super::{BackendError, DiagramRenderer, TemplateConverter};

/// Backend that shells out to `awsdac`.
#[derive(Debug, Clone)]
pub struct AwsdacCli {
    program: PathBuf,
}

impl AwsdacCli {
    /// Create a backend running `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: &[&OsStr], out: &mut dyn Write) -> Result<(), BackendError> {
        let program = self.program.display().to_string();
        debug!("Running {} {:?}", program, args);

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| BackendError::Spawn {
                program: program.clone(),
                source,
            })?;

        out.write_all(&output.stdout)?;
        out.write_all(&output.stderr)?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = stderr
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .unwrap_or("no error output")
            .trim()
            .to_string();

        Err(BackendError::failed(program, output.status.to_string(), detail))
    }
}

impl DiagramRenderer for AwsdacCli {
    fn render(&self, input: &Path, output: &Path, out: &mut dyn Write) -> Result<(), BackendError> {
        self.run(&[input.as_os_str(), OsStr::new("-o"), output.as_os_str()], out)
    }
}

impl TemplateConverter for AwsdacCli {
    fn convert(&self, template: &Path, output: &Path, out: &mut dyn Write) -> Result<(), BackendError> {
        self.run(
            &[
                template.as_os_str(),
                OsStr::new("--cfn-template"),
                OsStr::new("--dac-file"),
                OsStr::new("-o"),
                output.as_os_str(),
            ],
            out,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::execution::OutputCapture;
    use tempfile::TempDir;

    #[test]
    fn test_missing_program_is_spawn_error() {
        let cli = AwsdacCli::new("/nonexistent/bin/awsdac-12345");
        let mut capture = OutputCapture::discard();
        let result = cli.render(Path::new("in.yaml"), Path::new("out.png"), &mut capture);
        assert!(matches!(result, Err(BackendError::Spawn { .. })));
    }

    #[cfg(unix)]
    fn fake_awsdac(dir: &Path, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("awsdac");
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn test_output_goes_to_capture() {
        let dir = TempDir::new().unwrap();
        let cli = AwsdacCli::new(fake_awsdac(dir.path(), "echo \"rendering $1\""));
        let mut capture = OutputCapture::retain();

        cli.render(Path::new("in.yaml"), Path::new("out.png"), &mut capture)
            .unwrap();
        assert_eq!(capture.captured(), b"rendering in.yaml\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_failed_error() {
        let dir = TempDir::new().unwrap();
        let cli = AwsdacCli::new(fake_awsdac(dir.path(), "echo 'invalid resource type' >&2\nexit 3"));
        let mut capture = OutputCapture::discard();

        let err = cli
            .render(Path::new("in.yaml"), Path::new("out.png"), &mut capture)
            .unwrap_err();
        match err {
            BackendError::Failed { detail, .. } => assert_eq!(detail, "invalid resource type"),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_convert_passes_cfn_flags() {
        let dir = TempDir::new().unwrap();
        let cli = AwsdacCli::new(fake_awsdac(dir.path(), "echo \"$@\""));
        let mut capture = OutputCapture::retain();

        cli.convert(Path::new("t.yaml"), Path::new("o.png"), &mut capture)
            .unwrap();
        assert_eq!(
            capture.captured(),
            b"t.yaml --cfn-template --dac-file -o o.png\n"
        );
    }

    #[test]
    fn test_default_description_extension() {
        let cli = AwsdacCli::new("awsdac");
        assert_eq!(cli.description_extension(), "yaml");
    }
}
