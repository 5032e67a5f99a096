//! Path security for tools that read caller-supplied paths.
//!
//! Reads are confined to the configured root directory when one is set.

pub mod path_validator;

pub use path_validator::{PathSecurityError, validate_path};
