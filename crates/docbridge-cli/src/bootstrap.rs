//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - JSON roots store (via docbridge-runtime)
//! - Platform discoverer and native launcher (via docbridge-runtime)
//! - Root registry and core services (via docbridge-core)
//!
//! Command handlers receive the composed context and delegate to `AppCore`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use docbridge_core::{
    AppCore, FileLauncher, RootDiscoverer, RootRegistry, config_file_path, default_root_from_env,
};
use docbridge_runtime::{JsonRootsStore, NativeLauncher, platform_discoverer};

/// Bootstrap configuration for the CLI.
pub struct CliConfig {
    /// Location of the `{ "roots": [...] }` record.
    pub config_path: PathBuf,
    /// Root seeded into a fresh record.
    pub default_root: Option<PathBuf>,
    /// Merge discovered roots into the registry during bootstrap.
    pub discover_on_startup: bool,
    /// Platform discovery strategy.
    pub discoverer: Box<dyn RootDiscoverer>,
    /// Opens resolved files.
    pub launcher: Arc<dyn FileLauncher>,
}

impl CliConfig {
    /// Create config from the environment and the running platform.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            config_path: config_file_path()?,
            default_root: default_root_from_env(),
            discover_on_startup: true,
            discoverer: platform_discoverer(),
            launcher: Arc::new(NativeLauncher),
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
    /// Platform discovery strategy, for `roots discover`.
    pub discoverer: Box<dyn RootDiscoverer>,
    /// Location of the roots record.
    pub config_path: PathBuf,
}

impl CliContext {
    /// Access the `AppCore`.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }
}

/// Bootstrap the CLI context.
///
/// Loads (or creates) the roots record, then merges platform-discovered
/// roots unless disabled.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let store = Arc::new(JsonRootsStore::new(&config.config_path));
    let registry = RootRegistry::load(store, config.default_root)
        .await
        .with_context(|| format!("Failed to load roots from {}", config.config_path.display()))?;

    let app = AppCore::new(Arc::new(registry), config.launcher);

    if config.discover_on_startup {
        let roots = app.roots().discover(config.discoverer.as_ref()).await?;
        tracing::debug!(roots = roots.len(), "Startup discovery merged");
    }

    Ok(CliContext {
        app,
        discoverer: config.discoverer,
        config_path: config.config_path,
    })
}
