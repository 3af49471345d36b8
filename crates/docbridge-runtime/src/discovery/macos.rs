//! macOS: stream-mode volumes.

use std::path::PathBuf;

use docbridge_core::{RootDirectory, RootDiscoverer};

use super::dir_exists;

/// Volume mount points used by the sync client, in search order.
pub const VOLUME_MOUNTS: [&str; 2] = ["/Volumes/GoogleDrive", "/Volumes/Google Drive"];

/// Proposes every existing volume mount point.
#[derive(Debug, Clone)]
pub struct VolumeDiscoverer {
    volumes: Vec<PathBuf>,
}

impl VolumeDiscoverer {
    pub const fn new(volumes: Vec<PathBuf>) -> Self {
        Self { volumes }
    }
}

impl Default for VolumeDiscoverer {
    fn default() -> Self {
        Self::new(VOLUME_MOUNTS.iter().map(PathBuf::from).collect())
    }
}

impl RootDiscoverer for VolumeDiscoverer {
    fn platform(&self) -> &'static str {
        "macos"
    }

    fn discover(&self) -> Vec<RootDirectory> {
        self.volumes
            .iter()
            .filter(|v| dir_exists(v))
            .map(RootDirectory::discovered)
            .collect()
    }
}
