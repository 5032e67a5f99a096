//! Naming convention for secondary artifacts.
//!
//! Some backends write a second file next to the output path they were given
//! and never report it. The convention is: same directory, same file stem,
//! the backend's own extension. This module is the only place that knows it.

use std::path::{Path, PathBuf};

/// Path of the sibling artifact a backend writes for `primary`.
///
/// `extension` is given without the leading dot. A primary path without an
/// extension gets `extension` appended.
pub fn secondary_artifact_path(primary: &Path, extension: &str) -> PathBuf {
    primary.with_extension(extension.trim_start_matches('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swaps_extension() {
        let primary = Path::new("/tmp/scratch/cfn-output.png");
        assert_eq!(
            secondary_artifact_path(primary, "yaml"),
            PathBuf::from("/tmp/scratch/cfn-output.yaml")
        );
    }

    #[test]
    fn test_only_last_extension_is_replaced() {
        let primary = Path::new("diagram.v2.png");
        assert_eq!(
            secondary_artifact_path(primary, "yaml"),
            PathBuf::from("diagram.v2.yaml")
        );
    }

    #[test]
    fn test_appends_when_primary_has_no_extension() {
        let primary = Path::new("/tmp/out");
        assert_eq!(
            secondary_artifact_path(primary, "yaml"),
            PathBuf::from("/tmp/out.yaml")
        );
    }

    #[test]
    fn test_leading_dot_is_ignored() {
        let primary = Path::new("out.png");
        assert_eq!(secondary_artifact_path(primary, ".yaml"), PathBuf::from("out.yaml"));
    }

    #[test]
    fn test_stays_in_same_directory() {
        let primary = Path::new("/var/tmp/dac-abc/output.png");
        let secondary = secondary_artifact_path(primary, "yaml");
        assert_eq!(secondary.parent(), primary.parent());
    }
}
