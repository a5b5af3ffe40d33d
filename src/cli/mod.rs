//! Command-line interface for `bookshelf`.
//!
//! This module provides argument parsing using clap and starts the server.

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::ServerConfig;
use crate::{http, logging};

/// `bookshelf` - In-memory book collection service.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "bookshelf")]
#[command(
    author,
    version,
    about = "In-memory bookshelf service (HTTP + JSON)",
    long_about = None,
    after_help = "State is held in memory only and is lost when the process exits."
)]
pub struct Cli {
    /// Host name or address to bind
    #[arg(long, env = "BOOKSHELF_HOST", default_value = "localhost")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "BOOKSHELF_PORT", default_value_t = 9000)]
    pub port: u16,

    /// Disable permissive CORS headers
    #[arg(long)]
    pub no_cors: bool,

    /// Verbose output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if logging setup, runtime construction, address
/// resolution or serving fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, cli.log_json)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let config = ServerConfig::from_cli(&cli);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build async runtime")?;

    runtime.block_on(http::serve(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["bookshelf"]).unwrap();
        assert_eq!(cli.port, 9000);
        assert!(!cli.no_cors);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_flags() {
        let cli =
            Cli::try_parse_from(["bookshelf", "--host", "0.0.0.0", "-p", "8080", "-vv", "--no-cors"])
                .unwrap();
        assert_eq!(cli.host, "0.0.0.0");
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_cors);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["bookshelf", "-q", "-v"]).is_err());
    }
}
