//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters receive an
//! `AppCore` and reach every operation through it.

use std::sync::Arc;

use super::{ResolutionService, RootsService};
use crate::ports::FileLauncher;
use crate::registry::RootRegistry;

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let registry = Arc::new(RootRegistry::load(store, default_root).await?);
/// let core = AppCore::new(registry, Arc::new(NativeLauncher));
///
/// let resolution = core.resolution().resolve(request, SearchBudget::default()).await?;
/// ```
pub struct AppCore {
    registry: Arc<RootRegistry>,
    roots: RootsService,
    resolution: ResolutionService,
}

impl AppCore {
    /// Create a new `AppCore` over a loaded registry and a launcher.
    pub fn new(registry: Arc<RootRegistry>, launcher: Arc<dyn FileLauncher>) -> Self {
        Self {
            roots: RootsService::new(Arc::clone(&registry)),
            resolution: ResolutionService::new(Arc::clone(&registry), launcher),
            registry,
        }
    }

    /// Access the root registry.
    pub fn registry(&self) -> &RootRegistry {
        &self.registry
    }

    /// Access the roots service.
    pub const fn roots(&self) -> &RootsService {
        &self.roots
    }

    /// Access the resolution service.
    pub const fn resolution(&self) -> &ResolutionService {
        &self.resolution
    }
}
