//! Scratch artifacts for conversion tools.
//!
//! Each tool invocation opens one [`ArtifactScope`], a private temporary
//! directory. Files inside it are [`TempArtifact`] handles that delete their
//! file when dropped; dropping the scope removes the directory and anything a
//! backend left behind in it. Both happen on every exit path, including early
//! returns and unwinding.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, warn};

const SCOPE_PREFIX: &str = "dac-mcp-";

/// A private scratch directory owned by one tool invocation.
#[derive(Debug)]
pub struct ArtifactScope {
    dir: TempDir,
}

impl ArtifactScope {
    /// Create a uniquely named scratch directory under `parent`, or under the
    /// system temp directory when `parent` is `None`.
    pub fn new(parent: Option<&Path>) -> io::Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(SCOPE_PREFIX);

        let dir = match parent {
            Some(parent) => builder.tempdir_in(parent)?,
            None => builder.tempdir()?,
        };

        debug!("Opened artifact scope {}", dir.path().display());
        Ok(Self { dir })
    }

    /// Directory holding this scope's artifacts.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create `name` in the scope with `contents` written verbatim.
    pub fn write_input(&self, name: &str, contents: &str) -> io::Result<TempArtifact> {
        let artifact = self.reserve(name)?;
        fs::write(&artifact.path, contents)?;
        Ok(artifact)
    }

    /// Reserve a path for a file some other party will create.
    ///
    /// The file is not created. Reserving a name that already exists in the
    /// scope fails with `AlreadyExists`.
    pub fn reserve(&self, name: &str) -> io::Result<TempArtifact> {
        let path = self.dir.path().join(name);
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("scratch artifact already exists: {}", path.display()),
            ));
        }
        Ok(TempArtifact { path })
    }
}

/// A scratch file deleted when the handle is dropped.
#[derive(Debug)]
pub struct TempArtifact {
    path: PathBuf,
}

impl TempArtifact {
    /// Location of the artifact.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the path currently names a regular file.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the whole artifact as bytes.
    pub fn read_bytes(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }

    /// Read the whole artifact as UTF-8 text.
    pub fn read_text(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("Removed scratch artifact {}", self.path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove scratch artifact {}: {}", self.path.display(), e),
        }
    }
}
