//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports and domain logic. They don't know
//! which store, discoverer, or launcher sits behind the traits.

mod app_core;
mod resolution_service;
mod roots_service;

pub use app_core::AppCore;
pub use resolution_service::{ResolutionService, resolve_across_roots};
pub use roots_service::RootsService;
