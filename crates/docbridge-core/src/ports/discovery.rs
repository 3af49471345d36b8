//! Platform root discovery trait.

use crate::domain::RootDirectory;

/// Proposes roots where cloud-sync clients usually mount their trees.
///
/// Discovery is pure with respect to the registry: it only returns
/// proposals, and the caller merges them with `RootRegistry::merge_discovered`.
/// One implementation exists per platform, selected at startup.
pub trait RootDiscoverer: Send + Sync {
    /// Short platform label for logs.
    fn platform(&self) -> &'static str;

    /// Existing directories that look like sync roots, in priority order.
    fn discover(&self) -> Vec<RootDirectory>;
}
