//! Root directories and their persisted record.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where a root came from.
///
/// Provenance is not persisted: anything read back from the configuration
/// record is `Configured`, including roots discovered on a previous run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootOrigin {
    /// Added by the user, the environment, or loaded from the record.
    Configured,
    /// Proposed by platform discovery during this run.
    Discovered,
}

/// A configured search base.
///
/// The path is canonicalized on construction when the directory exists, so two
/// spellings of the same folder compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootDirectory {
    path: PathBuf,
    origin: RootOrigin,
}

impl RootDirectory {
    /// Create a root with the given provenance, canonicalizing when possible.
    pub fn new(path: impl AsRef<Path>, origin: RootOrigin) -> Self {
        Self {
            path: canonical_root_path(path.as_ref()),
            origin,
        }
    }

    /// A user-added or persisted root.
    pub fn configured(path: impl AsRef<Path>) -> Self {
        Self::new(path, RootOrigin::Configured)
    }

    /// A root proposed by platform discovery.
    pub fn discovered(path: impl AsRef<Path>) -> Self {
        Self::new(path, RootOrigin::Discovered)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn origin(&self) -> RootOrigin {
        self.origin
    }

    /// Final component of the root path, used to spot logical paths that
    /// repeat the root's own name.
    pub fn name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    /// Whether both roots point at the same directory.
    pub fn same_location(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl fmt::Display for RootDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Canonicalize `path` if it exists; otherwise keep it as given.
///
/// Missing roots (an unplugged drive, an unmounted stream volume) stay in the
/// registry under their configured spelling.
pub fn canonical_root_path(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// The persisted configuration record: `{ "roots": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RootsConfig {
    /// Root directories in priority order.
    pub roots: Vec<String>,
}

impl RootsConfig {
    /// Build the record from an ordered root list.
    pub fn from_roots(roots: &[RootDirectory]) -> Self {
        Self {
            roots: roots
                .iter()
                .map(|r| r.path().to_string_lossy().into_owned())
                .collect(),
        }
    }
}
