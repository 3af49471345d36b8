//! Paths command handler.
//!
//! Displays the configuration location and the roots it holds. This is the
//! first thing to check when a document "should" resolve but doesn't.

use anyhow::Result;
use docbridge_core::ResolvedPaths;

use super::print_roots;
use crate::bootstrap::CliContext;

/// Execute the paths command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let paths = ResolvedPaths::resolve()?;
    println!("{paths}");
    if paths.config_path != ctx.config_path {
        println!("active_config = {}", ctx.config_path.display());
    }
    println!();
    println!("roots:");
    print_roots(&ctx.app().registry().snapshot().await);
    Ok(())
}
