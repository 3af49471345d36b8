//! Resolution orchestrator.
//!
//! Iterates the configured roots in priority order and, for each, the
//! strategies cheapest-first. The first sandbox-verified hit wins; when every
//! root × strategy pair comes up empty the result is `Resolution::NotFound`.
//! No strategy is retried and no partial result is ever returned.

use std::sync::Arc;

use crate::contracts::ResolveRequest;
use crate::domain::{
    CandidateNameSet, LogicalLocation, Resolution, RootDirectory, SearchBudget,
};
use crate::ports::{CoreError, FileLauncher};
use crate::registry::RootRegistry;
use crate::resolver::CandidateResolver;

/// Resolve across a fixed root list. Blocking; performs the filesystem walk.
pub fn resolve_across_roots(
    roots: &[RootDirectory],
    location: &LogicalLocation,
    candidates: &CandidateNameSet,
    budget: &SearchBudget,
) -> Resolution {
    roots
        .iter()
        .find_map(|root| CandidateResolver::new(root, location, candidates, budget).resolve())
        .map_or(Resolution::NotFound, Resolution::Found)
}

/// Service for resolve and resolve-and-open requests.
pub struct ResolutionService {
    registry: Arc<RootRegistry>,
    launcher: Arc<dyn FileLauncher>,
}

impl ResolutionService {
    /// Create a new resolution service.
    pub fn new(registry: Arc<RootRegistry>, launcher: Arc<dyn FileLauncher>) -> Self {
        Self { registry, launcher }
    }

    /// Resolve a request to one file under a configured root.
    ///
    /// The request is validated before anything touches the filesystem. The
    /// root list is snapshotted at call start, and the walk runs on the
    /// blocking pool. Dropping the returned future cancels the walk.
    pub async fn resolve(
        &self,
        request: ResolveRequest,
        budget: SearchBudget,
    ) -> Result<Resolution, CoreError> {
        let (location, candidates) = request.into_parts()?;
        let roots = self.registry.snapshot().await;

        let call_token = budget.cancellation_token().child_token();
        let budget = budget.with_cancellation(call_token.clone());
        let _cancel_on_drop = call_token.drop_guard();

        tracing::debug!(
            roots = roots.len(),
            segments = location.segments().len(),
            candidates = candidates.names().len(),
            "Resolving"
        );

        let resolution = tokio::task::spawn_blocking(move || {
            resolve_across_roots(&roots, &location, &candidates, &budget)
        })
        .await
        .map_err(|e| CoreError::Internal(format!("resolve task failed: {e}")))?;

        match &resolution {
            Resolution::Found(file) => tracing::info!(
                path = %file.path.display(),
                root = %file.root.display(),
                strategy = %file.strategy,
                match_kind = ?file.match_kind,
                "Resolved document"
            ),
            Resolution::NotFound => tracing::info!("Document not found under any root"),
        }

        Ok(resolution)
    }

    /// Resolve, then open the file with the platform's default application.
    ///
    /// `NotFound` is returned as a value; a launch failure after a successful
    /// resolve is `CoreError::OpenFailure`.
    pub async fn resolve_and_open(
        &self,
        request: ResolveRequest,
        budget: SearchBudget,
    ) -> Result<Resolution, CoreError> {
        let resolution = self.resolve(request, budget).await?;

        if let Resolution::Found(file) = &resolution {
            self.launcher
                .open(&file.path)
                .map_err(|e| CoreError::OpenFailure {
                    path: file.path.clone(),
                    reason: e.to_string(),
                })?;
            tracing::info!(path = %file.path.display(), "Opened document");
        }

        Ok(resolution)
    }
}
