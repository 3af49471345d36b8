//! Core domain types.
//!
//! Pure value types shared by the registry, the resolver and the adapters.
//! Nothing in here performs I/O except best-effort canonicalization of roots.

mod budget;
mod candidates;
mod location;
mod resolution;
mod root;

pub use budget::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_VISITED, SearchBudget};
pub use candidates::CandidateNameSet;
pub use location::LogicalLocation;
pub use resolution::{MatchKind, Resolution, ResolvedFile, Strategy};
pub use root::{RootDirectory, RootOrigin, RootsConfig, canonical_root_path};
