//! Native "open" action.

use std::path::Path;

use thiserror::Error;

/// The platform launcher refused or failed to start an application.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct LaunchError(pub String);

/// Opens a resolved file with the user's default application.
#[cfg_attr(test, mockall::automock)]
pub trait FileLauncher: Send + Sync {
    /// Launch the default application for `path`.
    fn open(&self, path: &Path) -> Result<(), LaunchError>;
}
