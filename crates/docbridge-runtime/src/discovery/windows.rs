//! Windows: drive letters carrying sync-client marker folders.

use std::path::PathBuf;

use docbridge_core::{RootDirectory, RootDiscoverer};

use super::dir_exists;

/// Subfolders that mark a drive letter as a sync-client mount.
pub const DRIVE_MARKERS: [&str; 4] = ["My Drive", "Il mio Drive", "Shared drives", "Drive condivisi"];

/// Checks drive roots for marker folders.
///
/// A drive with at least one marker contributes each existing marker folder
/// followed by the bare drive root. Drives without markers are ignored.
#[derive(Debug, Clone)]
pub struct DriveLetterDiscoverer {
    drives: Vec<PathBuf>,
}

impl DriveLetterDiscoverer {
    pub const fn new(drives: Vec<PathBuf>) -> Self {
        Self { drives }
    }

    /// Every drive letter from `A:` to `Z:`.
    pub fn all_letters() -> Self {
        Self::new(
            (b'A'..=b'Z')
                .map(|letter| PathBuf::from(format!("{}:\\", char::from(letter))))
                .collect(),
        )
    }
}

impl RootDiscoverer for DriveLetterDiscoverer {
    fn platform(&self) -> &'static str {
        "windows"
    }

    fn discover(&self) -> Vec<RootDirectory> {
        let mut found = Vec::new();

        for drive in &self.drives {
            let markers: Vec<PathBuf> = DRIVE_MARKERS
                .iter()
                .map(|m| drive.join(m))
                .filter(|p| dir_exists(p))
                .collect();

            if markers.is_empty() {
                continue;
            }

            tracing::debug!(drive = %drive.display(), markers = markers.len(), "Found sync drive");
            found.extend(markers.into_iter().map(RootDirectory::discovered));
            found.push(RootDirectory::discovered(drive));
        }

        found
    }
}
