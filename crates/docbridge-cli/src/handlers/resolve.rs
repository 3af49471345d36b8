//! Resolve and open command handlers.

use anyhow::Result;
use docbridge_core::{Resolution, ResolveResponse, SearchBudget};

use crate::bootstrap::CliContext;
use crate::commands::SearchArgs;
use crate::error::CliError;

/// Execute the resolve command.
pub async fn execute(ctx: &CliContext, args: &SearchArgs) -> Result<()> {
    let budget = cancel_on_ctrl_c(args.budget());
    let resolution = ctx
        .app()
        .resolution()
        .resolve(args.request(), budget)
        .await
        .map_err(CliError::from)?;

    report(args, &resolution)
}

/// Execute the open command.
pub async fn execute_open(ctx: &CliContext, args: &SearchArgs) -> Result<()> {
    let budget = cancel_on_ctrl_c(args.budget());
    let resolution = ctx
        .app()
        .resolution()
        .resolve_and_open(args.request(), budget)
        .await
        .map_err(CliError::from)?;

    report(args, &resolution)
}

/// Print the outcome; `NotFound` becomes a non-zero exit.
fn report(args: &SearchArgs, resolution: &Resolution) -> Result<()> {
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&ResolveResponse::from(resolution))?
        );
    }

    match resolution {
        Resolution::Found(file) => {
            if !args.json {
                println!("{}", file.path.display());
            }
            if args.explain {
                eprintln!("root:     {}", file.root.display());
                eprintln!("strategy: {}", file.strategy);
                eprintln!("match:    {:?}", file.match_kind);
            }
            Ok(())
        }
        Resolution::NotFound => Err(CliError::NotFound(args.candidates.join(", ")).into()),
    }
}

/// Cancel deep scans when the user hits Ctrl-C.
fn cancel_on_ctrl_c(budget: SearchBudget) -> SearchBudget {
    let token = budget.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("Interrupted, cancelling search");
            token.cancel();
        }
    });
    budget
}
