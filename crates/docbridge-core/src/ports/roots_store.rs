//! Roots store trait definition.
//!
//! This port defines the interface for persisting the root list.
//! Implementations handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::RootsConfig;

/// Persistence for the `{ "roots": [...] }` record.
///
/// # Design Rules
///
/// - Works with the domain `RootsConfig` type directly
/// - `load` distinguishes "no record yet" (`Ok(None)`) from a broken record
/// - `save` rewrites the whole record
#[async_trait]
pub trait RootsStore: Send + Sync {
    /// Load the record, or `None` if it has never been written.
    async fn load(&self) -> Result<Option<RootsConfig>, RepositoryError>;

    /// Replace the record.
    async fn save(&self, config: &RootsConfig) -> Result<(), RepositoryError>;
}
