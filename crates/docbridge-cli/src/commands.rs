//! Main commands enum and shared search arguments.

use std::time::Duration;

use clap::{Args, Subcommand};
use docbridge_core::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_VISITED, ResolveRequest, SearchBudget};

use crate::roots_commands::RootsCommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the configuration location and current roots
    Paths,

    /// Manage the root directories searched for documents
    Roots {
        #[command(subcommand)]
        command: RootsCommand,
    },

    /// Resolve a document to a local path
    Resolve(SearchArgs),

    /// Resolve a document and open it with the default application
    Open(SearchArgs),
}

/// Arguments shared by `resolve` and `open`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SearchArgs {
    /// Acceptable filenames, in preference order
    #[arg(value_name = "NAME")]
    pub candidates: Vec<String>,

    /// Folder path as seen in the cloud drive (e.g. "My Drive/ISO/4.2")
    #[arg(short = 'p', long = "logical-path")]
    pub logical_path: Option<String>,

    /// Expected file type for fuzzy matching (e.g. "pdf", ".docx")
    #[arg(short = 't', long = "type")]
    pub file_type: Option<String>,

    /// Maximum folder depth for deep scans
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Maximum folders visited per deep scan
    #[arg(long, default_value_t = DEFAULT_MAX_VISITED)]
    pub max_visited: usize,

    /// Abort deep scans after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Report which root, strategy and match kind produced the result
    #[arg(long)]
    pub explain: bool,

    /// Print the `{ found, path | reason }` response as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    /// The request these arguments describe.
    pub fn request(&self) -> ResolveRequest {
        ResolveRequest {
            logical_path: self.logical_path.clone(),
            candidates: self.candidates.clone(),
            file_type: self.file_type.clone(),
        }
    }

    /// A fresh budget for one invocation.
    pub fn budget(&self) -> SearchBudget {
        let budget = SearchBudget::new(self.max_depth, self.max_visited);
        match self.timeout_ms {
            Some(ms) => budget.with_timeout(Duration::from_millis(ms)),
            None => budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Cli;
    use clap::Parser;

    fn search_args(argv: &[&str]) -> SearchArgs {
        match Cli::parse_from(argv).command {
            Some(Commands::Resolve(args) | Commands::Open(args)) => args,
            _ => panic!("expected a search command"),
        }
    }

    #[test]
    fn test_resolve_args() {
        let args = search_args(&[
            "docbridge",
            "resolve",
            "-p",
            "My Drive/ISO/4.2",
            "-t",
            "pdf",
            "Policy.pdf",
            "Policy v2.pdf",
        ]);

        assert_eq!(args.candidates, vec!["Policy.pdf", "Policy v2.pdf"]);
        assert_eq!(args.logical_path.as_deref(), Some("My Drive/ISO/4.2"));
        assert_eq!(args.file_type.as_deref(), Some("pdf"));
        assert_eq!(args.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(args.max_visited, DEFAULT_MAX_VISITED);
        assert!(!args.explain);
    }

    #[test]
    fn test_budget_flags() {
        let args = search_args(&[
            "docbridge",
            "open",
            "--max-depth",
            "3",
            "--max-visited",
            "100",
            "--timeout-ms",
            "250",
            "x.pdf",
        ]);

        let budget = args.budget();
        assert_eq!(budget.max_depth(), 3);
        assert_eq!(budget.max_visited(), 100);
        assert!(!budget.is_expired());
    }

    #[test]
    fn test_zero_timeout_expires_immediately() {
        let args = search_args(&["docbridge", "resolve", "--timeout-ms", "0", "x.pdf"]);
        assert!(args.budget().is_expired());
    }

    #[test]
    fn test_candidates_may_be_omitted_at_parse_time() {
        // The core rejects this as invalid input.
        let args = search_args(&["docbridge", "resolve", "-p", "ISO"]);
        assert!(args.request().candidates.is_empty());
    }
}
