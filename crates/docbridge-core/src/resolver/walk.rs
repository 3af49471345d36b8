//! Bounded depth-first directory walk.
//!
//! The walk is an iterator: the visitor returns `Some` to finish early, and
//! the budget ends the walk when the shared visited count, the deadline or
//! the cancellation token runs out.

use std::path::Path;

use walkdir::WalkDir;

use crate::domain::SearchBudget;

/// Visit `root` and its subdirectories depth-first, in name order.
///
/// `root` is depth 0. Directories deeper than `budget.max_depth()` are never
/// visited. Symbolic links are not followed, and unreadable directories are
/// skipped with their subtrees. Every visit is charged to `budget`. Returns
/// the first value `visit` produces, or `None` when the tree or the budget is
/// exhausted.
pub(crate) fn walk_directories<T>(
    root: &Path,
    budget: &SearchBudget,
    mut visit: impl FnMut(&Path) -> Option<T>,
) -> Option<T> {
    let walker = WalkDir::new(root)
        .max_depth(budget.max_depth())
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.file_type().is_dir());

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(root = %root.display(), error = %err, "Skipping unreadable subtree");
                continue;
            }
        };

        if budget.is_expired() {
            tracing::debug!(root = %root.display(), "Walk stopped: deadline or cancellation");
            return None;
        }
        if !budget.try_visit() {
            tracing::debug!(
                root = %root.display(),
                visited = budget.visited(),
                "Walk stopped: visited-directory budget exhausted"
            );
            return None;
        }

        if let Some(found) = visit(entry.path()) {
            return Some(found);
        }
    }

    None
}
