//! CLI command definitions for the `shelf` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Multi-user bookmark service.
#[derive(Parser)]
#[command(name = "shelf", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for info, -vv for debug, -vvv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on (overrides config.toml and SHELF_PORT).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config.toml and SHELF_HOST).
        #[arg(long)]
        host: Option<String>,
    },

    /// Create the database if needed and apply pending migrations.
    Migrate,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_flags_are_optional() {
        let cli = Cli::try_parse_from(["shelf", "serve"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Serve {
                port: None,
                host: None
            }
        ));

        let cli = Cli::try_parse_from(["shelf", "-vv", "serve", "--port", "8080", "--host", "0.0.0.0"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Serve { port, host } => {
                assert_eq!(port, Some(8080));
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["shelf", "migrate", "--log-json", "--quiet"]).unwrap();
        assert!(cli.log_json);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Migrate));
    }
}
