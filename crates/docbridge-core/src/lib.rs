#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod contracts;
pub mod domain;
pub mod normalize;
pub mod paths;
pub mod ports;
pub mod registry;
pub mod resolver;
pub mod sandbox;
pub mod services;

// Re-export commonly used types for convenience
pub use contracts::{ResolveRequest, ResolveResponse, RootsResponse};
pub use domain::{
    CandidateNameSet, DEFAULT_MAX_DEPTH, DEFAULT_MAX_VISITED, LogicalLocation, MatchKind,
    Resolution, ResolvedFile, RootDirectory, RootOrigin, RootsConfig, SearchBudget, Strategy,
    canonical_root_path,
};
pub use normalize::normalize;
pub use ports::{CoreError, FileLauncher, LaunchError, RepositoryError, RootDiscoverer, RootsStore};
pub use registry::RootRegistry;
pub use sandbox::is_inside;
pub use services::{AppCore, ResolutionService, RootsService, resolve_across_roots};

// Re-export path utilities
pub use paths::{
    CONFIG_FILE_NAME, DATA_DIR_ENV, DEFAULT_ROOT_ENV, PathError, ResolvedPaths, config_file_path,
    data_root, default_root_from_env, normalize_user_path,
};

// Silence unused dev-dependency warnings for crates only used by integration tests
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio_test as _;
