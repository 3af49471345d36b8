//! Candidate resolution against a single root.
//!
//! Three strategies, cheapest first:
//!
//! 1. **Direct navigation**: join the logical folder path onto the root
//!    (falling back to its parent) and match names there.
//! 2. **Deep suffix scan**: walk the root for folders whose path ends with
//!    the logical folder path, for mounts that nest the cloud tree deeper.
//! 3. **Deep filename scan**: walk the root matching names everywhere.
//!
//! Each hit is sandbox-checked against the root before it is returned; a
//! hit that fails the check is dropped and the next strategy runs.

mod deep_scan;
mod direct;
mod matching;
mod walk;

use std::path::PathBuf;

use crate::domain::{
    CandidateNameSet, LogicalLocation, MatchKind, ResolvedFile, RootDirectory, SearchBudget,
    Strategy,
};
use crate::sandbox::relative_within;

/// Runs the resolution strategies for one root and one request.
pub struct CandidateResolver<'a> {
    root: &'a RootDirectory,
    location: &'a LogicalLocation,
    candidates: &'a CandidateNameSet,
    budget: &'a SearchBudget,
}

impl<'a> CandidateResolver<'a> {
    pub const fn new(
        root: &'a RootDirectory,
        location: &'a LogicalLocation,
        candidates: &'a CandidateNameSet,
        budget: &'a SearchBudget,
    ) -> Self {
        Self {
            root,
            location,
            candidates,
            budget,
        }
    }

    /// Try every strategy in order and return the first hit.
    pub fn resolve(&self) -> Option<ResolvedFile> {
        if !self.root.path().is_dir() {
            tracing::debug!(root = %self.root, "Skipping unavailable root");
            return None;
        }

        Strategy::ORDER.into_iter().find_map(|strategy| self.run(strategy))
    }

    /// Run a single strategy.
    pub fn run(&self, strategy: Strategy) -> Option<ResolvedFile> {
        let hit = match strategy {
            Strategy::DirectNavigation => self.direct_navigation(),
            Strategy::DeepSuffixScan => self.deep_suffix_scan(),
            Strategy::DeepFilenameScan => self.deep_filename_scan(),
        }?;
        self.accept(hit, strategy)
    }

    fn direct_navigation(&self) -> Option<(PathBuf, MatchKind)> {
        let dir = direct::target_directory(self.root, self.location)?;
        matching::match_in_directory(&dir, self.candidates)
    }

    fn deep_suffix_scan(&self) -> Option<(PathBuf, MatchKind)> {
        let suffix = self.location.segments_under_root(self.root.name());
        deep_scan::suffix_scan(self.root.path(), suffix, self.candidates, self.budget)
    }

    fn deep_filename_scan(&self) -> Option<(PathBuf, MatchKind)> {
        deep_scan::filename_scan(self.root.path(), self.candidates, self.budget)
    }

    /// Sandbox gate: only descendants of the root leave the resolver, and
    /// they leave as `root + clean relative path`.
    fn accept(&self, (path, match_kind): (PathBuf, MatchKind), strategy: Strategy) -> Option<ResolvedFile> {
        let Some(relative) = relative_within(&path, self.root.path()) else {
            tracing::debug!(
                root = %self.root,
                path = %path.display(),
                %strategy,
                "Dropped match outside root"
            );
            return None;
        };

        Some(ResolvedFile {
            path: self.root.path().join(relative),
            root: self.root.path().to_path_buf(),
            strategy,
            match_kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn place(root: &Path, rel: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"").unwrap();
        path
    }

    fn resolve(root: &RootDirectory, logical: &str, names: &[&str]) -> Option<ResolvedFile> {
        let location = LogicalLocation::parse(logical);
        let candidates = CandidateNameSet::new(names.iter().copied(), None).unwrap();
        let budget = SearchBudget::default();
        CandidateResolver::new(root, &location, &candidates, &budget).resolve()
    }

    #[test]
    fn test_direct_navigation_wins_when_folder_exists() {
        let temp = tempdir().unwrap();
        let root = RootDirectory::configured(temp.path());
        let file = place(root.path(), "ISO/4.2/4.2.1/Policy.pdf");
        place(root.path(), "Archive/ISO/4.2/4.2.1/Policy.pdf");

        let hit = resolve(&root, "ISO/4.2/4.2.1", &["Policy.pdf"]).unwrap();
        assert_eq!(hit.path, file);
        assert_eq!(hit.strategy, Strategy::DirectNavigation);
    }

    #[test]
    fn test_suffix_scan_handles_deeper_mount() {
        let temp = tempdir().unwrap();
        let root = RootDirectory::configured(temp.path());
        let file = place(root.path(), "Users/X/Desktop/ISO/4.2/4.2.1/Policy.pdf");

        let hit = resolve(&root, "ISO/4.2/4.2.1", &["Policy.pdf"]).unwrap();
        assert_eq!(hit.path, file);
        assert_eq!(hit.strategy, Strategy::DeepSuffixScan);
    }

    #[test]
    fn test_filename_scan_is_last_resort() {
        let temp = tempdir().unwrap();
        let root = RootDirectory::configured(temp.path());
        let file = place(root.path(), "Misc/Old/Policy.pdf");

        let hit = resolve(&root, "ISO/4.2/4.2.1", &["Policy.pdf"]).unwrap();
        assert_eq!(hit.path, file);
        assert_eq!(hit.strategy, Strategy::DeepFilenameScan);
    }

    #[test]
    fn test_parent_fallback_matches_in_parent_folder() {
        let temp = tempdir().unwrap();
        let root = RootDirectory::configured(temp.path());
        let file = place(root.path(), "ISO/4.2/Policy.pdf");

        let hit = resolve(&root, "ISO/4.2/4.2.1", &["Policy.pdf"]).unwrap();
        assert_eq!(hit.path, file);
        assert_eq!(hit.strategy, Strategy::DirectNavigation);
    }

    #[test]
    fn test_traversal_segments_never_escape_root() {
        let temp = tempdir().unwrap();
        let root_dir = temp.path().join("drive");
        fs::create_dir_all(&root_dir).unwrap();
        place(temp.path(), "secret/Policy.pdf");
        let root = RootDirectory::configured(&root_dir);

        assert!(resolve(&root, "../secret", &["Policy.pdf"]).is_none());
        assert!(resolve(&root, "ISO/../../secret/Policy.pdf", &["Policy.pdf"]).is_none());
    }

    #[test]
    fn test_result_path_is_clean() {
        let temp = tempdir().unwrap();
        let root = RootDirectory::configured(temp.path());
        fs::create_dir_all(root.path().join("ISO")).unwrap();
        let file = place(root.path(), "HR/Policy.pdf");

        let hit = resolve(&root, "ISO/../HR", &["Policy.pdf"]).unwrap();
        assert_eq!(hit.path, file);
        assert_eq!(hit.strategy, Strategy::DirectNavigation);
    }

    #[test]
    fn test_unavailable_root_yields_nothing() {
        let temp = tempdir().unwrap();
        let root = RootDirectory::configured(temp.path().join("unplugged"));
        assert!(resolve(&root, "ISO", &["Policy.pdf"]).is_none());
    }

    #[test]
    fn test_deep_scans_share_one_visit_allowance() {
        let temp = tempdir().unwrap();
        let root = RootDirectory::configured(temp.path());
        fs::create_dir_all(root.path().join("d1")).unwrap();
        let file = place(root.path(), "d2/Policy.pdf");
        let location = LogicalLocation::parse("ISO/4.2");
        let candidates = CandidateNameSet::new(["Policy.pdf"], None).unwrap();

        // The suffix scan spends all three visits, leaving none for the filename scan.
        let tight = SearchBudget::new(12, 3);
        assert!(CandidateResolver::new(&root, &location, &candidates, &tight).resolve().is_none());
        assert_eq!(tight.visited(), 3);

        let enough = SearchBudget::new(12, 6);
        let hit = CandidateResolver::new(&root, &location, &candidates, &enough)
            .resolve()
            .unwrap();
        assert_eq!(hit.path, file);
        assert_eq!(hit.strategy, Strategy::DeepFilenameScan);
        assert_eq!(enough.visited(), 6);
    }
}
