//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Resolve cloud-drive documents to local files.
#[derive(Parser)]
#[command(name = "docbridge")]
#[command(about = "Resolve logical document references to files under local sync roots")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Skip merging platform-discovered roots at startup
    #[arg(long = "no-discover", global = true)]
    pub no_discover: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
