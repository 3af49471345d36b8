//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No storage format (JSON, file layout) in any signature
//! - No OS-specific types: discoverers return plain `RootDirectory` values
//! - Traits are minimal: load/save for storage, one method for launching

pub mod discovery;
pub mod launcher;
pub mod roots_store;

use std::path::PathBuf;
use thiserror::Error;

pub use discovery::RootDiscoverer;
pub use launcher::{FileLauncher, LaunchError};
pub use roots_store::RootsStore;

#[cfg(test)]
pub use launcher::MockFileLauncher;

/// Domain-specific errors for repository operations.
///
/// Abstracts away storage details (file I/O, JSON) so services can handle
/// persistence failures uniformly.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Storage backend error (filesystem, permissions).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes, HTTP status
/// codes). `NotFound` is deliberately absent: a failed search is an ordinary
/// `Resolution::NotFound` value, not an error.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The request was rejected before any filesystem access.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A root could not be added; the registry is unchanged.
    #[error("Invalid root {path}: {reason}")]
    InvalidRoot { path: PathBuf, reason: String },

    /// The file was resolved but the native application could not be launched.
    #[error("Failed to open {path}: {reason}")]
    OpenFailure { path: PathBuf, reason: String },

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
