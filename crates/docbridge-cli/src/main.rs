//! CLI entry point - the composition root.
//!
//! Bootstrap wires infrastructure together; command dispatch routes to
//! handlers which delegate to `AppCore`.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use docbridge_cli::roots_commands::RootsCommand;
use docbridge_cli::{Cli, CliConfig, Commands, bootstrap, exit_code_for, handlers};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before anything reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,docbridge_core=debug,docbridge_runtime=debug,docbridge_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // `roots discover` runs discovery itself, so a dry run stays dry.
    let explicit_discover = matches!(
        command,
        Commands::Roots {
            command: RootsCommand::Discover { .. }
        }
    );

    let mut config = CliConfig::with_defaults()?;
    config.discover_on_startup = !cli.no_discover && !explicit_discover;
    let ctx = bootstrap(config).await?;

    match command {
        Commands::Paths => handlers::paths::execute(&ctx).await,
        Commands::Roots { command } => handlers::roots::execute(&ctx, command).await,
        Commands::Resolve(args) => handlers::resolve::execute(&ctx, &args).await,
        Commands::Open(args) => handlers::resolve::execute_open(&ctx, &args).await,
    }
}
