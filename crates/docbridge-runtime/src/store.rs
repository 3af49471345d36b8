//! JSON file implementation of the `RootsStore` port.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use docbridge_core::{RepositoryError, RootsConfig, RootsStore};

/// Stores the roots record as pretty-printed JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonRootsStore {
    path: PathBuf,
}

impl JsonRootsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RootsStore for JsonRootsStore {
    async fn load(&self) -> Result<Option<RootsConfig>, RepositoryError> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(RepositoryError::Storage(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )));
            }
        };

        serde_json::from_str(&json).map(Some).map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Corrupt roots configuration");
            RepositoryError::Serialization(format!(
                "failed to parse {}: {e}",
                self.path.display()
            ))
        })
    }

    async fn save(&self, config: &RootsConfig) -> Result<(), RepositoryError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                RepositoryError::Storage(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        tokio::fs::write(&self.path, json).await.map_err(|e| {
            RepositoryError::Storage(format!("failed to write {}: {e}", self.path.display()))
        })?;

        tracing::debug!(path = %self.path.display(), roots = config.roots.len(), "Saved roots configuration");
        Ok(())
    }
}
