#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for crates only used by integration tests
#[cfg(test)]
use tempfile as _;

// Used by the binary entry point only
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod roots_commands;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, SearchArgs};
pub use error::{CliError, exit_code_for};
pub use parser::Cli;
pub use roots_commands::RootsCommand;
