//! Root management subcommands.

use clap::Subcommand;

/// Subcommands of `docbridge roots`.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RootsCommand {
    /// List configured roots in priority order
    List {
        /// Print `{ "roots": [...] }` as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a root directory
    Add {
        /// Existing directory to search
        path: String,
    },

    /// Remove a root directory
    Remove {
        /// Root to remove, as listed by `roots list`
        path: String,
    },

    /// Scan platform mount points for sync roots
    Discover {
        /// Print what would be added without changing the configuration
        #[arg(long)]
        dry_run: bool,
    },
}
