//! Logical locations: the remote classification path of a document.

use crate::normalize::{eq_ignore_case, looks_like_filename};

/// Folder names cloud-sync clients use for the top of a synced tree.
///
/// A logical path starting with one of these already names the root, so the
/// segment is skipped when navigating from a root.
pub const CLOUD_ROOT_ALIASES: &[&str] = &[
    "My Drive",
    "MyDrive",
    "Il mio Drive",
    "Shared drives",
    "Drive condivisi",
    "Google Drive",
    "GoogleDrive",
];

/// An ordered list of path segments, e.g. `ISO/4.2/4.2.1/Policy.pdf`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogicalLocation {
    segments: Vec<String>,
}

impl LogicalLocation {
    /// Parse a logical path. Both `/` and `\` separate segments; blank
    /// segments are dropped. `.` and `..` are kept verbatim so the sandbox
    /// sees exactly what was requested.
    pub fn parse(raw: &str) -> Self {
        let segments = raw
            .split(['/', '\\'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self { segments }
    }

    /// Parse an optional logical path; `None` yields an empty location.
    pub fn from_optional(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or_default()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments naming folders: a trailing filename-shaped segment is dropped.
    pub fn directory_segments(&self) -> &[String] {
        match self.segments.split_last() {
            Some((last, rest)) if looks_like_filename(last) => rest,
            _ => &self.segments,
        }
    }

    /// Folder segments to append to a root called `root_name`.
    ///
    /// A leading segment equal to the root's own name or to a cloud-root alias
    /// is dropped, so `My Drive/ISO` under a root named `My Drive` does not
    /// become `My Drive/My Drive/ISO`.
    pub fn segments_under_root(&self, root_name: Option<&str>) -> &[String] {
        let dirs = self.directory_segments();
        match dirs.split_first() {
            Some((first, rest)) if names_root(first, root_name) => rest,
            _ => dirs,
        }
    }
}

fn names_root(segment: &str, root_name: Option<&str>) -> bool {
    root_name.is_some_and(|name| eq_ignore_case(segment, name))
        || CLOUD_ROOT_ALIASES
            .iter()
            .any(|alias| eq_ignore_case(segment, alias))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_both_separators() {
        let loc = LogicalLocation::parse(r"ISO\4.2/4.2.1//");
        assert_eq!(loc.segments(), ["ISO", "4.2", "4.2.1"]);
    }

    #[test]
    fn test_trailing_filename_is_dropped() {
        let loc = LogicalLocation::parse("ISO/4.2/4.2.1/Policy.pdf");
        assert_eq!(loc.directory_segments(), ["ISO", "4.2", "4.2.1"]);
    }

    #[test]
    fn test_classification_code_is_not_a_filename() {
        let loc = LogicalLocation::parse("ISO/4.2/4.2.1");
        assert_eq!(loc.directory_segments(), ["ISO", "4.2", "4.2.1"]);
    }

    #[test]
    fn test_root_name_is_not_doubled() {
        let loc = LogicalLocation::parse("mydrive/ISO/4.2");
        assert_eq!(loc.segments_under_root(Some("MyDrive")), ["ISO", "4.2"]);
    }

    #[test]
    fn test_cloud_alias_is_dropped() {
        let loc = LogicalLocation::parse("Il mio Drive/Qualità/Manuale.pdf");
        assert_eq!(loc.segments_under_root(Some("G")), ["Qualità"]);
    }

    #[test]
    fn test_only_leading_alias_is_dropped() {
        let loc = LogicalLocation::parse("ISO/My Drive");
        assert_eq!(loc.segments_under_root(None), ["ISO", "My Drive"]);
    }

    #[test]
    fn test_missing_location_is_empty() {
        let loc = LogicalLocation::from_optional(None);
        assert!(loc.is_empty());
        assert!(loc.segments_under_root(Some("x")).is_empty());
    }
}
