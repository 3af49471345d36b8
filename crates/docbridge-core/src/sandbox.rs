//! Root containment checks.
//!
//! Every path the engine surfaces passes through [`is_inside`] first. The
//! check is purely lexical: `.` and `..` components are folded, then the
//! candidate must be expressible as "root + downward descent". Existence is
//! checked separately by the caller.

use std::path::{Component, Path, PathBuf};

/// Returns `true` when `candidate` is `root` itself or a descendant of it.
///
/// Both paths must be of the same kind (absolute or relative). A candidate
/// whose relative path from `root` would start with `..`, or which lives on
/// another drive prefix, is rejected.
pub fn is_inside(candidate: &Path, root: &Path) -> bool {
    relative_within(candidate, root).is_some()
}

/// The path of `candidate` relative to `root`, if it stays inside `root`.
pub fn relative_within(candidate: &Path, root: &Path) -> Option<PathBuf> {
    if candidate.is_absolute() != root.is_absolute() {
        return None;
    }

    let candidate = fold_components(candidate);
    let root = fold_components(root);

    let relative = candidate.strip_prefix(&root).ok()?;
    let escapes = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)));

    (!escapes).then(|| relative.to_path_buf())
}

/// Lexically resolve `.` and `..` without touching the filesystem.
///
/// `..` directly under a root or prefix is dropped (`/..` is `/`); leading
/// `..` of a relative path are kept.
fn fold_components(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    parts.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descendant_is_inside() {
        let root = Path::new("/data/MyDrive");
        assert!(is_inside(Path::new("/data/MyDrive/ISO/4.2/Policy.pdf"), root));
    }

    #[test]
    fn test_root_is_inside_itself() {
        let root = Path::new("/data/MyDrive");
        assert!(is_inside(root, root));
    }

    #[test]
    fn test_parent_traversal_escapes() {
        let root = Path::new("/data/MyDrive");
        assert!(!is_inside(Path::new("/data/MyDrive/../../etc/passwd"), root));
        assert!(!is_inside(Path::new("/data/MyDrive/ISO/../../Other"), root));
    }

    #[test]
    fn test_traversal_that_returns_inside_is_allowed() {
        let root = Path::new("/data/MyDrive");
        assert!(is_inside(Path::new("/data/MyDrive/ISO/../HR/file.pdf"), root));
    }

    #[test]
    fn test_sibling_with_shared_prefix_is_outside() {
        let root = Path::new("/data/MyDrive");
        assert!(!is_inside(Path::new("/data/MyDrive2/file.pdf"), root));
    }

    #[test]
    fn test_mixed_absolute_and_relative_are_rejected() {
        assert!(!is_inside(Path::new("ISO/file.pdf"), Path::new("/data")));
        assert!(!is_inside(Path::new("/data/file.pdf"), Path::new("data")));
    }

    #[test]
    fn test_relative_within_reports_descent() {
        let rel = relative_within(
            Path::new("/data/MyDrive/./ISO/4.2"),
            Path::new("/data/MyDrive"),
        );
        assert_eq!(rel, Some(PathBuf::from("ISO/4.2")));
    }

    #[test]
    fn test_joined_absolute_segment_is_outside() {
        // Joining an absolute segment replaces the base entirely.
        let root = Path::new("/data/MyDrive");
        let joined = root.join("/etc");
        assert!(!is_inside(&joined, root));
    }
}
