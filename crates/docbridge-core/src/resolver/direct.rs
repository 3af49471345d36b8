//! Direct navigation: derive the target folder from the logical path.

use std::path::{Path, PathBuf};

use crate::domain::{LogicalLocation, RootDirectory};
use crate::sandbox::is_inside;

/// The folder direct navigation searches under `root`, if any.
///
/// Folder segments (root alias and trailing filename removed) are joined onto
/// the root. When that folder is missing, its immediate parent is used
/// instead: a terminal classification folder is often never materialized
/// locally. That fallback can land in a sibling sharing a numeric prefix and
/// is kept as-is.
///
/// Every path is sandbox-checked before it is touched on disk.
pub(crate) fn target_directory(root: &RootDirectory, location: &LogicalLocation) -> Option<PathBuf> {
    let segments = location.segments_under_root(root.name());
    let target = segments
        .iter()
        .fold(root.path().to_path_buf(), |acc, segment| acc.join(segment));

    if !is_inside(&target, root.path()) {
        tracing::debug!(root = %root, target = %target.display(), "Rejected unsafe logical path");
        return None;
    }
    if target.is_dir() {
        return Some(target);
    }

    let parent = target.parent()?;
    if parent != target && usable_dir(parent, root.path()) {
        tracing::debug!(
            target = %target.display(),
            parent = %parent.display(),
            "Target folder missing, falling back to parent"
        );
        return Some(parent.to_path_buf());
    }

    None
}

fn usable_dir(dir: &Path, root: &Path) -> bool {
    is_inside(dir, root) && dir.is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_joins_segments_onto_root() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("ISO/4.2/4.2.1")).unwrap();
        let root = RootDirectory::configured(temp.path());

        let target = target_directory(&root, &LogicalLocation::parse("ISO/4.2/4.2.1/Policy.pdf"));
        assert_eq!(target, Some(root.path().join("ISO/4.2/4.2.1")));
    }

    #[test]
    fn test_falls_back_to_parent_when_leaf_missing() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("ISO/4.2")).unwrap();
        let root = RootDirectory::configured(temp.path());

        let target = target_directory(&root, &LogicalLocation::parse("ISO/4.2/4.2.1"));
        assert_eq!(target, Some(root.path().join("ISO/4.2")));
    }

    #[test]
    fn test_no_target_when_parent_also_missing() {
        let temp = tempdir().unwrap();
        let root = RootDirectory::configured(temp.path());

        assert_eq!(
            target_directory(&root, &LogicalLocation::parse("ISO/4.2/4.2.1")),
            None
        );
    }

    #[test]
    fn test_empty_location_targets_root() {
        let temp = tempdir().unwrap();
        let root = RootDirectory::configured(temp.path());

        assert_eq!(
            target_directory(&root, &LogicalLocation::default()),
            Some(root.path().to_path_buf())
        );
    }

    #[test]
    fn test_traversal_out_of_root_is_rejected() {
        let temp = tempdir().unwrap();
        let inner = temp.path().join("drive");
        fs::create_dir_all(&inner).unwrap();
        fs::create_dir_all(temp.path().join("secret")).unwrap();
        let root = RootDirectory::configured(&inner);

        assert_eq!(
            target_directory(&root, &LogicalLocation::parse("../secret")),
            None
        );
    }
}
