//! Resolve and configure-roots payloads.

use serde::{Deserialize, Serialize};

use crate::domain::{CandidateNameSet, LogicalLocation, Resolution, RootDirectory};
use crate::ports::CoreError;

/// Reason reported when no root held the document.
pub const NOT_FOUND_REASON: &str = "NotFound";

/// `{ logicalPath?, candidates, fileType? }`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_path: Option<String>,
    #[serde(default)]
    pub candidates: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
}

impl ResolveRequest {
    /// Validate and split into domain values.
    ///
    /// Fails with `CoreError::InvalidInput` when no candidate name is usable.
    pub fn into_parts(self) -> Result<(LogicalLocation, CandidateNameSet), CoreError> {
        let candidates = CandidateNameSet::new(&self.candidates, self.file_type.as_deref())?;
        let location = LogicalLocation::from_optional(self.logical_path.as_deref());
        Ok((location, candidates))
    }
}

/// `{ found: true, path }` or `{ found: false, reason: "NotFound" }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolveResponse {
    pub found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<&Resolution> for ResolveResponse {
    fn from(resolution: &Resolution) -> Self {
        match resolution {
            Resolution::Found(file) => Self {
                found: true,
                path: Some(file.path.to_string_lossy().into_owned()),
                reason: None,
            },
            Resolution::NotFound => Self {
                found: false,
                path: None,
                reason: Some(NOT_FOUND_REASON.to_string()),
            },
        }
    }
}

/// `{ roots: [...] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RootsResponse {
    pub roots: Vec<String>,
}

impl From<&[RootDirectory]> for RootsResponse {
    fn from(roots: &[RootDirectory]) -> Self {
        Self {
            roots: roots
                .iter()
                .map(|r| r.path().to_string_lossy().into_owned())
                .collect(),
        }
    }
}
