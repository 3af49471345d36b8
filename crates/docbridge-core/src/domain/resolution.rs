//! Resolution outcomes.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Search strategy that produced a match, cheapest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Walk straight to the folder the logical path names.
    DirectNavigation,
    /// Bounded walk for folders ending in the logical path.
    DeepSuffixScan,
    /// Bounded walk looking at every folder's files.
    DeepFilenameScan,
}

impl Strategy {
    /// All strategies in the order they are tried for each root.
    pub const ORDER: [Self; 3] = [
        Self::DirectNavigation,
        Self::DeepSuffixScan,
        Self::DeepFilenameScan,
    ];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DirectNavigation => "direct navigation",
            Self::DeepSuffixScan => "deep suffix scan",
            Self::DeepFilenameScan => "deep filename scan",
        })
    }
}

/// How the file's name matched the candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Case-insensitive equality with a candidate name.
    Exact,
    /// Same extension, normalized stem contains a candidate's stem.
    Fuzzy,
}

/// A file located under a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub path: PathBuf,
    pub root: PathBuf,
    pub strategy: Strategy,
    pub match_kind: MatchKind,
}

/// Result of a resolve call: one file, or an explicit "not found".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(ResolvedFile),
    NotFound,
}

impl Resolution {
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The resolved path, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(file) => Some(&file.path),
            Self::NotFound => None,
        }
    }
}
