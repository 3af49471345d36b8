//! Native implementation of the `FileLauncher` port.

use std::path::Path;

use docbridge_core::{FileLauncher, LaunchError};

/// Opens files with the operating system's default application.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeLauncher;

impl FileLauncher for NativeLauncher {
    fn open(&self, path: &Path) -> Result<(), LaunchError> {
        tracing::debug!(path = %path.display(), "Launching default application");
        open::that_detached(path)
            .map_err(|e| LaunchError(format!("failed to open {}: {e}", path.display())))
    }
}
