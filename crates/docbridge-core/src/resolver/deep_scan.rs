//! Deep scans: bounded walks of a whole root.

use std::path::{Component, Path, PathBuf};

use super::matching::match_in_directory;
use super::walk::walk_directories;
use crate::domain::{CandidateNameSet, MatchKind, SearchBudget};
use crate::normalize::eq_ignore_case;

/// Walk `root` for folders whose trailing components equal `suffix`
/// (case-insensitively) and match candidates inside them.
///
/// An empty suffix would match every folder, so it yields `None`; that case
/// is the filename scan's job.
pub(crate) fn suffix_scan(
    root: &Path,
    suffix: &[String],
    candidates: &CandidateNameSet,
    budget: &SearchBudget,
) -> Option<(PathBuf, MatchKind)> {
    if suffix.is_empty() {
        return None;
    }

    walk_directories(root, budget, |dir| {
        if ends_with_segments(dir, suffix) {
            match_in_directory(dir, candidates)
        } else {
            None
        }
    })
}

/// Walk `root` matching candidates in every folder.
pub(crate) fn filename_scan(
    root: &Path,
    candidates: &CandidateNameSet,
    budget: &SearchBudget,
) -> Option<(PathBuf, MatchKind)> {
    walk_directories(root, budget, |dir| match_in_directory(dir, candidates))
}

/// Whether the last `suffix.len()` normal components of `dir` equal `suffix`.
///
/// A component that is not valid UTF-8 never equals a segment; it still
/// occupies its position in the comparison.
fn ends_with_segments(dir: &Path, suffix: &[String]) -> bool {
    let names: Vec<Option<&str>> = dir
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_str()),
            _ => None,
        })
        .collect();

    names.len() >= suffix.len()
        && names[names.len() - suffix.len()..]
            .iter()
            .zip(suffix)
            .all(|(name, segment)| name.is_some_and(|name| eq_ignore_case(name, segment)))
}
