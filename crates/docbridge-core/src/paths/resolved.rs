//! All configuration paths captured in one call.
//!
//! Backs the `docbridge paths` command and makes path resolution easy to
//! compare across adapters.

use std::path::PathBuf;

use super::{PathError, config_file_path, data_root, default_root_from_env};

/// Snapshot of every location docbridge derives from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Directory holding persisted state.
    pub data_root: PathBuf,
    /// The `{ "roots": [...] }` record.
    pub config_path: PathBuf,
    /// Seed root from `DOCBRIDGE_DEFAULT_ROOT`, if any.
    pub default_root: Option<PathBuf>,
}

impl ResolvedPaths {
    /// Resolve all paths using the current environment.
    pub fn resolve() -> Result<Self, PathError> {
        Ok(Self {
            data_root: data_root()?,
            config_path: config_file_path()?,
            default_root: default_root_from_env(),
        })
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "data_root = {}", self.data_root.display())?;
        writeln!(f, "config_path = {}", self.config_path.display())?;
        match &self.default_root {
            Some(root) => write!(f, "default_root = {}", root.display()),
            None => write!(f, "default_root = (unset)"),
        }
    }
}
