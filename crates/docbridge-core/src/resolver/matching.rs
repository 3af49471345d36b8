//! Name matching inside a single directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{CandidateNameSet, MatchKind};
use crate::normalize::{eq_ignore_case, extension_of, normalize};

/// Look for a candidate file directly inside `dir`.
///
/// Exact (case-insensitive) matches win over fuzzy ones, and candidates are
/// tried in their given order. Among fuzzy hits the first file in name order
/// is taken. An unreadable directory yields `None`.
pub(crate) fn match_in_directory(
    dir: &Path,
    candidates: &CandidateNameSet,
) -> Option<(PathBuf, MatchKind)> {
    let files = list_files(dir)?;

    for name in candidates.names() {
        if let Some(file) = files.iter().find(|f| eq_ignore_case(f, name)) {
            return Some((dir.join(file), MatchKind::Exact));
        }
    }

    for (needle, ext) in candidates.fuzzy_needles() {
        let hit = files.iter().find(|f| {
            extension_of(f).is_some_and(|e| e == ext) && normalize(f).contains(&needle)
        });
        if let Some(file) = hit {
            return Some((dir.join(file), MatchKind::Fuzzy));
        }
    }

    None
}

/// Names of regular files (or symlinks to files) in `dir`, sorted.
fn list_files(dir: &Path) -> Option<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!(dir = %dir.display(), error = %err, "Skipping unreadable directory");
            return None;
        }
    };

    let mut files: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| {
            entry.file_type().is_ok_and(|t| {
                t.is_file() || (t.is_symlink() && entry.path().is_file())
            })
        })
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();

    files.sort();
    Some(files)
}
