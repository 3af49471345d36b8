//! The root registry: a persisted, de-duplicated, ordered list of roots.
//!
//! The registry is the only owner of the root list. Resolve calls read an
//! immutable [`RootRegistry::snapshot`] taken at call start, so adding or
//! removing a root never affects a walk already in flight. Mutations hold the
//! write lock across persistence, which serializes them; a failed save leaves
//! the in-memory list untouched.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{RootDirectory, RootsConfig, canonical_root_path};
use crate::paths::normalize_user_path;
use crate::ports::{CoreError, RootsStore};

/// Ordered, de-duplicated root list backed by a [`RootsStore`].
pub struct RootRegistry {
    store: Arc<dyn RootsStore>,
    roots: RwLock<Vec<RootDirectory>>,
}

impl RootRegistry {
    /// Load the registry from `store`.
    ///
    /// When no record exists yet, one is created holding `default_root` (the
    /// environment-supplied root) or nothing, and written back immediately.
    pub async fn load(
        store: Arc<dyn RootsStore>,
        default_root: Option<PathBuf>,
    ) -> Result<Self, CoreError> {
        let (paths, created): (Vec<PathBuf>, bool) = match store.load().await? {
            Some(config) => (config.roots.into_iter().map(PathBuf::from).collect(), false),
            None => (default_root.into_iter().collect(), true),
        };
        let roots =
            off_runtime(move || dedup(paths.iter().map(RootDirectory::configured))).await?;

        if created {
            tracing::info!(roots = roots.len(), "Creating initial roots configuration");
            store.save(&RootsConfig::from_roots(&roots)).await?;
        }

        Ok(Self {
            store,
            roots: RwLock::new(roots),
        })
    }

    /// Immutable copy of the current root list, in priority order.
    pub async fn snapshot(&self) -> Vec<RootDirectory> {
        self.roots.read().await.clone()
    }

    /// Add a user root.
    ///
    /// The path must exist and be a directory; it is canonicalized before the
    /// duplicate check. Adding a root that is already present is a no-op.
    pub async fn add(&self, raw: &str) -> Result<Vec<RootDirectory>, CoreError> {
        let path = normalize_user_path(raw).map_err(|e| CoreError::InvalidRoot {
            path: PathBuf::from(raw),
            reason: e.to_string(),
        })?;
        let root = off_runtime(move || {
            validate_root_dir(&path)?;
            Ok::<_, CoreError>(RootDirectory::configured(&path))
        })
        .await??;

        let mut roots = self.roots.write().await;
        if roots.iter().any(|r| r.same_location(&root)) {
            tracing::debug!(root = %root, "Root already registered");
            return Ok(roots.clone());
        }

        let mut updated = roots.clone();
        updated.push(root.clone());
        self.persist(&updated).await?;
        *roots = updated;

        tracing::info!(root = %root, "Added root");
        Ok(roots.clone())
    }

    /// Remove a root. Removing an unknown root still rewrites the record.
    pub async fn remove(&self, raw: &str) -> Result<Vec<RootDirectory>, CoreError> {
        let target = match normalize_user_path(raw) {
            Ok(path) => off_runtime(move || canonical_root_path(&path)).await?,
            Err(_) => PathBuf::from(raw.trim()),
        };

        let mut roots = self.roots.write().await;
        let updated: Vec<RootDirectory> = roots
            .iter()
            .filter(|r| r.path() != target)
            .cloned()
            .collect();

        self.persist(&updated).await?;
        if updated.len() != roots.len() {
            tracing::info!(root = %target.display(), "Removed root");
        }
        *roots = updated;
        Ok(roots.clone())
    }

    /// Union `proposals` into the list, keyed by canonical path.
    ///
    /// Existing entries keep their position; new ones are appended in proposal
    /// order. Nothing is ever removed. The record is rewritten either way.
    pub async fn merge_discovered(
        &self,
        proposals: Vec<RootDirectory>,
    ) -> Result<Vec<RootDirectory>, CoreError> {
        let mut roots = self.roots.write().await;
        let mut updated = roots.clone();

        for proposal in proposals {
            if !updated.iter().any(|r| r.same_location(&proposal)) {
                tracing::info!(root = %proposal, "Discovered root");
                updated.push(proposal);
            }
        }

        self.persist(&updated).await?;
        *roots = updated;
        Ok(roots.clone())
    }

    async fn persist(&self, roots: &[RootDirectory]) -> Result<(), CoreError> {
        self.store
            .save(&RootsConfig::from_roots(roots))
            .await
            .map_err(CoreError::from)
    }
}

/// Run filesystem checks on the blocking pool.
async fn off_runtime<T, F>(f: F) -> Result<T, CoreError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| CoreError::Internal(format!("root check task failed: {e}")))
}

fn validate_root_dir(path: &Path) -> Result<(), CoreError> {
    let reason = if !path.exists() {
        "path does not exist"
    } else if !path.is_dir() {
        "path is not a directory"
    } else {
        return Ok(());
    };

    Err(CoreError::InvalidRoot {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    })
}

fn dedup(roots: impl Iterator<Item = RootDirectory>) -> Vec<RootDirectory> {
    let mut unique: Vec<RootDirectory> = Vec::new();
    for root in roots {
        if root.path().as_os_str().is_empty() {
            continue;
        }
        if !unique.iter().any(|r| r.same_location(&root)) {
            unique.push(root);
        }
    }
    unique
}
