//! Request and response shapes shared by adapters.
//!
//! These mirror the companion's external interface so every adapter (CLI
//! output today, any transport layered on top later) speaks the same JSON.

mod resolve;

pub use resolve::{NOT_FOUND_REASON, ResolveRequest, ResolveResponse, RootsResponse};
