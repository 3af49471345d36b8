//! Root management service.

use std::sync::Arc;

use crate::contracts::RootsResponse;
use crate::domain::RootDirectory;
use crate::ports::{CoreError, RootDiscoverer};
use crate::registry::RootRegistry;

/// Lists, edits and discovers roots on top of the [`RootRegistry`].
pub struct RootsService {
    registry: Arc<RootRegistry>,
}

impl RootsService {
    pub const fn new(registry: Arc<RootRegistry>) -> Self {
        Self { registry }
    }

    /// Current roots in priority order.
    pub async fn list(&self) -> RootsResponse {
        RootsResponse::from(self.registry.snapshot().await.as_slice())
    }

    /// Add a user root and return the updated list.
    pub async fn add(&self, raw: &str) -> Result<RootsResponse, CoreError> {
        let roots = self.registry.add(raw).await?;
        Ok(RootsResponse::from(roots.as_slice()))
    }

    /// Remove a root and return the updated list.
    pub async fn remove(&self, raw: &str) -> Result<RootsResponse, CoreError> {
        let roots = self.registry.remove(raw).await?;
        Ok(RootsResponse::from(roots.as_slice()))
    }

    /// Ask `discoverer` for candidate roots without touching the registry.
    pub fn propose(&self, discoverer: &dyn RootDiscoverer) -> Vec<RootDirectory> {
        let proposals = discoverer.discover();
        tracing::debug!(
            platform = discoverer.platform(),
            proposals = proposals.len(),
            "Root discovery finished"
        );
        proposals
    }

    /// Run discovery and merge the proposals into the registry.
    ///
    /// Discovery that finds nothing is not an error; the list is left as is.
    pub async fn discover(
        &self,
        discoverer: &dyn RootDiscoverer,
    ) -> Result<Vec<RootDirectory>, CoreError> {
        let proposals = self.propose(discoverer);
        self.registry.merge_discovered(proposals).await
    }
}
