//! Shelf CLI and REST API entry point.
//!
//! Binary name: `shelf`
//!
//! Parses CLI arguments, sets up tracing, then dispatches to the command
//! handler.

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use shelf_api::cli::{self, Cli, Commands};
use shelf_api::state::Environment;
use shelf_observe::tracing_setup::{TracingOptions, init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need tracing or config
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = Cli::command();
        generate(*shell, &mut cmd, "shelf", &mut std::io::stdout());
        return Ok(());
    }

    let options = TracingOptions::for_verbosity(cli.verbose, cli.quiet)
        .with_json(cli.log_json)
        .with_otel(cli.otel);
    init_tracing(&options).map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let env = Environment::load().await?;

    let result = match cli.command {
        Commands::Serve { host, port } => cli::serve::serve(&env, host, port).await,
        Commands::Migrate => cli::migrate::migrate(&env).await,
        Commands::Completions { .. } => Ok(()),
    };

    shutdown_tracing();
    result
}
