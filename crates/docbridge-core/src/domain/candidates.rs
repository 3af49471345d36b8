//! Acceptable filenames for one logical document.

use crate::normalize::{extension_of, normalize};
use crate::ports::CoreError;

/// A non-empty, ordered, duplicate-free list of acceptable filenames plus the
/// expected file type used by fuzzy matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateNameSet {
    names: Vec<String>,
    expected_extension: Option<String>,
}

impl CandidateNameSet {
    /// Build a candidate set.
    ///
    /// Names are trimmed and blank names dropped; exact duplicates keep their
    /// first position. `file_type` may be given with or without a leading dot.
    ///
    /// Returns `CoreError::InvalidInput` when no usable name remains.
    pub fn new<I, S>(names: I, file_type: Option<&str>) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if !name.is_empty() && !unique.iter().any(|n| n == name) {
                unique.push(name.to_string());
            }
        }

        if unique.is_empty() {
            return Err(CoreError::InvalidInput(
                "at least one candidate filename is required".to_string(),
            ));
        }

        let expected_extension = file_type
            .map(|t| t.trim().trim_start_matches('.').to_lowercase())
            .filter(|t| !t.is_empty());

        Ok(Self {
            names: unique,
            expected_extension,
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn expected_extension(&self) -> Option<&str> {
        self.expected_extension.as_deref()
    }

    /// Fuzzy needles: `(normalized stem, required extension)` per candidate.
    ///
    /// The required extension is the expected file type when given, otherwise
    /// the candidate's own extension. Candidates with neither, or whose stem
    /// normalizes to nothing, yield no needle.
    pub(crate) fn fuzzy_needles(&self) -> Vec<(String, String)> {
        self.names
            .iter()
            .filter_map(|name| {
                let ext = self
                    .expected_extension
                    .clone()
                    .or_else(|| extension_of(name))?;
                let stem = normalize(name);
                (!stem.is_empty()).then_some((stem, ext))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_is_invalid_input() {
        let err = CandidateNameSet::new(Vec::<String>::new(), None).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn test_blank_names_only_is_invalid_input() {
        let err = CandidateNameSet::new(["  ", ""], Some("pdf")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let set = CandidateNameSet::new(["b.pdf", "a.pdf", "b.pdf"], None).unwrap();
        assert_eq!(set.names(), ["b.pdf", "a.pdf"]);
    }

    #[test]
    fn test_file_type_is_normalized() {
        let set = CandidateNameSet::new(["x"], Some(" .DOCX ")).unwrap();
        assert_eq!(set.expected_extension(), Some("docx"));

        let set = CandidateNameSet::new(["x"], Some("")).unwrap();
        assert_eq!(set.expected_extension(), None);
    }

    #[test]
    fn test_needles_fall_back_to_candidate_extension() {
        let set = CandidateNameSet::new(["Policy_v2.PDF", "notes"], None).unwrap();
        assert_eq!(
            set.fuzzy_needles(),
            vec![("policyv2".to_string(), "pdf".to_string())]
        );
    }

    #[test]
    fn test_needles_prefer_expected_type() {
        let set =
            CandidateNameSet::new(["4.2.1_GestioneDocumenti_Rev.3"], Some("docx")).unwrap();
        assert_eq!(
            set.fuzzy_needles(),
            vec![(
                "4.2.1gestionedocumentirev.3".to_string(),
                "docx".to_string()
            )]
        );
    }
}
