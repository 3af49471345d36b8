//! Linux: the home-mirrored sync folder.

use std::path::PathBuf;

use docbridge_core::{RootDirectory, RootDiscoverer};

use super::dir_exists;

/// Folder name the sync client mirrors into the home directory.
pub const HOME_MIRROR_DIR: &str = "Google Drive";

/// Proposes `<home>/Google Drive` when it exists.
#[derive(Debug, Clone)]
pub struct HomeMirrorDiscoverer {
    home: Option<PathBuf>,
}

impl HomeMirrorDiscoverer {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    /// Check the current user's home directory.
    pub fn from_home() -> Self {
        Self { home: dirs::home_dir() }
    }
}

impl RootDiscoverer for HomeMirrorDiscoverer {
    fn platform(&self) -> &'static str {
        "linux"
    }

    fn discover(&self) -> Vec<RootDirectory> {
        let Some(home) = &self.home else {
            tracing::debug!("No home directory, skipping discovery");
            return Vec::new();
        };

        let mirror = home.join(HOME_MIRROR_DIR);
        if dir_exists(&mirror) {
            vec![RootDirectory::discovered(mirror)]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docbridge_core::RootOrigin;
    use tempfile::tempdir;

    #[test]
    fn test_proposes_existing_mirror() {
        let home = tempdir().unwrap();
        std::fs::create_dir(home.path().join(HOME_MIRROR_DIR)).unwrap();

        let found = HomeMirrorDiscoverer::new(home.path()).discover();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), Some(HOME_MIRROR_DIR));
        assert_eq!(found[0].origin(), RootOrigin::Discovered);
    }

    #[test]
    fn test_no_mirror_no_proposals() {
        let home = tempdir().unwrap();
        assert!(HomeMirrorDiscoverer::new(home.path()).discover().is_empty());
    }

    #[test]
    fn test_mirror_must_be_a_directory() {
        let home = tempdir().unwrap();
        std::fs::write(home.path().join(HOME_MIRROR_DIR), b"").unwrap();
        assert!(HomeMirrorDiscoverer::new(home.path()).discover().is_empty());
    }
}
