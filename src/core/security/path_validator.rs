use std::io;
use std::path::{Path, PathBuf};

use crate::core::config::SecurityConfig;

/// Errors that can occur during path validation.
#[derive(Debug, thiserror::Error)]
pub enum PathSecurityError {
    #[error("path '{path}' is outside allowed root directory '{root}'")]
    OutsideRootDirectory { path: PathBuf, root: PathBuf },

    #[error("symlink '{path}' points outside allowed root directory")]
    SymlinkOutsideRoot { path: PathBuf },

    #[error("path does not exist: '{path}'")]
    PathNotFound { path: PathBuf },

    #[error("cannot resolve path '{path}': {error}")]
    Unresolvable { path: PathBuf, error: io::Error },
}

/// Validate a caller-supplied path against the security settings.
///
/// The path is canonicalized, so `.`/`..` components and symlinks are
/// resolved before the root check. With no root configured any existing path
/// is accepted.
///
/// ```rust,ignore
/// let safe = validate_path("diagrams/out.png", &config.security)?;
/// ```
pub fn validate_path(input_path: &str, security: &SecurityConfig) -> Result<PathBuf, PathSecurityError> {
    let path = Path::new(input_path);
    let canonical = canonicalize(path)?;

    let Some(root) = &security.root_path else {
        return Ok(canonical);
    };

    let root = canonicalize(root)?;

    if path.is_symlink() && !security.allow_symlinks {
        // Symlinks are only tolerated when their target stays in the root
        let target = path.read_link().map_err(|error| PathSecurityError::Unresolvable {
            path: path.to_path_buf(),
            error,
        })?;
        let target = if target.is_relative() {
            path.parent().map(|p| p.join(&target)).unwrap_or(target)
        } else {
            target
        };
        let resolved = canonicalize(&target).map_err(|_| PathSecurityError::SymlinkOutsideRoot {
            path: path.to_path_buf(),
        })?;
        if !resolved.starts_with(&root) {
            return Err(PathSecurityError::SymlinkOutsideRoot {
                path: path.to_path_buf(),
            });
        }
    }

    if !canonical.starts_with(&root) {
        if path.is_symlink() {
            return Err(PathSecurityError::SymlinkOutsideRoot {
                path: path.to_path_buf(),
            });
        }
        return Err(PathSecurityError::OutsideRootDirectory {
            path: canonical,
            root,
        });
    }

    Ok(canonical)
}

fn canonicalize(path: &Path) -> Result<PathBuf, PathSecurityError> {
    path.canonicalize().map_err(|error| {
        if error.kind() == io::ErrorKind::NotFound {
            PathSecurityError::PathNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PathSecurityError::Unresolvable {
                path: path.to_path_buf(),
                error,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn security(root: Option<PathBuf>, allow_symlinks: bool) -> SecurityConfig {
        SecurityConfig {
            root_path: root,
            allow_symlinks,
        }
    }

    #[test]
    fn test_no_root_allows_existing_paths() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("icon.png");
        fs::write(&file, "png").unwrap();

        let result = validate_path(file.to_str().unwrap(), &security(None, true));
        assert!(result.is_ok());
    }

    #[test]
    fn test_no_root_still_reports_missing_path() {
        let result = validate_path("/nonexistent/icon-12345.png", &security(None, true));
        assert!(matches!(result, Err(PathSecurityError::PathNotFound { .. })));
    }

    #[test]
    fn test_path_within_root() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("icon.png");
        fs::write(&file, "png").unwrap();

        let config = security(Some(dir.path().to_path_buf()), true);
        assert!(validate_path(file.to_str().unwrap(), &config).is_ok());
    }

    #[test]
    fn test_path_outside_root() {
        let root = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let file = outside.path().join("secret.png");
        fs::write(&file, "png").unwrap();

        let config = security(Some(root.path().to_path_buf()), true);
        let result = validate_path(file.to_str().unwrap(), &config);
        assert!(matches!(result, Err(PathSecurityError::OutsideRootDirectory { .. })));
    }

    #[test]
    fn test_traversal_is_resolved_before_check() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(dir.path().join("above.png"), "png").unwrap();

        let config = security(Some(sub.clone()), true);
        let result = validate_path(sub.join("../above.png").to_str().unwrap(), &config);
        assert!(matches!(result, Err(PathSecurityError::OutsideRootDirectory { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_outside_root_blocked() {
        use std::os::unix::fs::symlink;

        let root = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let target = outside.path().join("target.png");
        let link = root.path().join("link.png");
        fs::write(&target, "png").unwrap();
        symlink(&target, &link).unwrap();

        let config = security(Some(root.path().to_path_buf()), true);
        let result = validate_path(link.to_str().unwrap(), &config);
        assert!(matches!(result, Err(PathSecurityError::SymlinkOutsideRoot { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_within_root_allowed() {
        use std::os::unix::fs::symlink;

        let root = TempDir::new().unwrap();
        let target = root.path().join("target.png");
        let link = root.path().join("link.png");
        fs::write(&target, "png").unwrap();
        symlink(&target, &link).unwrap();

        for allow in [true, false] {
            let config = security(Some(root.path().to_path_buf()), allow);
            assert!(validate_path(link.to_str().unwrap(), &config).is_ok());
        }
    }
}
