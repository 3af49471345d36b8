//! Roots command handlers.

use anyhow::Result;
use docbridge_core::{RootDirectory, RootsResponse};

use super::print_roots;
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::roots_commands::RootsCommand;

/// Dispatch a `roots` subcommand.
pub async fn execute(ctx: &CliContext, command: RootsCommand) -> Result<()> {
    match command {
        RootsCommand::List { json } => list(ctx, json).await,
        RootsCommand::Add { path } => add(ctx, &path).await.map(|_| ()),
        RootsCommand::Remove { path } => remove(ctx, &path).await.map(|_| ()),
        RootsCommand::Discover { dry_run } => discover(ctx, dry_run).await.map(|_| ()),
    }
}

/// Print the configured roots.
pub async fn list(ctx: &CliContext, json: bool) -> Result<()> {
    if json {
        let response = ctx.app().roots().list().await;
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_roots(&ctx.app().registry().snapshot().await);
    }
    Ok(())
}

/// Add a root and print the updated list.
pub async fn add(ctx: &CliContext, path: &str) -> Result<RootsResponse> {
    let response = ctx.app().roots().add(path).await.map_err(CliError::from)?;
    println!("Roots ({}):", response.roots.len());
    print_roots(&ctx.app().registry().snapshot().await);
    Ok(response)
}

/// Remove a root and print the updated list.
pub async fn remove(ctx: &CliContext, path: &str) -> Result<RootsResponse> {
    let before = ctx.app().registry().snapshot().await.len();
    let response = ctx
        .app()
        .roots()
        .remove(path)
        .await
        .map_err(CliError::from)?;

    if response.roots.len() == before {
        println!("'{path}' was not a configured root.");
    }
    print_roots(&ctx.app().registry().snapshot().await);
    Ok(response)
}

/// Scan platform mount points; merge them unless `dry_run`.
///
/// Returns the roots that are (or, on a dry run, would be) new.
pub async fn discover(ctx: &CliContext, dry_run: bool) -> Result<Vec<RootDirectory>> {
    let current = ctx.app().registry().snapshot().await;
    let proposals = ctx.app().roots().propose(ctx.discoverer.as_ref());
    let new: Vec<RootDirectory> = proposals
        .iter()
        .filter(|p| !current.iter().any(|r| r.same_location(p)))
        .cloned()
        .collect();

    println!(
        "Discovery ({}): {} candidate root(s), {} new",
        ctx.discoverer.platform(),
        proposals.len(),
        new.len()
    );
    for root in &new {
        println!("  + {root}");
    }

    if dry_run {
        println!("Dry run: configuration unchanged.");
    } else {
        ctx.app()
            .registry()
            .merge_discovered(proposals)
            .await
            .map_err(CliError::from)?;
    }

    Ok(new)
}
