//! Platform root discovery.
//!
//! Each discoverer checks a fixed set of locations where a cloud-sync client
//! mounts its tree and proposes the ones that exist. Candidate locations are
//! plain data so every discoverer can be exercised on any host.

mod linux;
mod macos;
mod windows;

use std::path::Path;

use docbridge_core::RootDiscoverer;

pub use linux::{HOME_MIRROR_DIR, HomeMirrorDiscoverer};
pub use macos::{VOLUME_MOUNTS, VolumeDiscoverer};
pub use windows::{DRIVE_MARKERS, DriveLetterDiscoverer};

/// The discoverer for the running operating system.
pub fn platform_discoverer() -> Box<dyn RootDiscoverer> {
    match std::env::consts::OS {
        "windows" => Box::new(DriveLetterDiscoverer::all_letters()),
        "macos" => Box::new(VolumeDiscoverer::default()),
        _ => Box::new(HomeMirrorDiscoverer::from_home()),
    }
}

/// Whether `path` is an existing directory, logging lookup errors.
pub(crate) fn dir_exists(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) => meta.is_dir(),
        Err(e) => {
            tracing::trace!(path = %path.display(), error = %e, "Candidate location unavailable");
            false
        }
    }
}
