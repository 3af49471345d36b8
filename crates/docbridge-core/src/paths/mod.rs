//! Path utilities for docbridge configuration and user-supplied locations.
//!
//! This module provides the canonical path resolution for all docbridge components:
//! - Per-user data directory
//! - The persisted roots configuration file
//! - The environment-supplied default root
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - OS-specific logic is kept private in `platform`

mod config;
mod error;
mod platform;
mod resolved;

#[cfg(test)]
pub(crate) mod test_utils;

// Error type
pub use error::PathError;

// Platform detection and roots
pub use platform::{DATA_DIR_ENV, data_root, normalize_user_path};

// Configuration file and environment defaults
pub use config::{CONFIG_FILE_NAME, DEFAULT_ROOT_ENV, config_file_path, default_root_from_env};

// Resolved snapshot for the `paths` command
pub use resolved::ResolvedPaths;
