//! CLI argument definitions using clap
//!
//! Commands:
//! - querysense serve --config <path> [--port <port>]
//! - querysense query
//! - querysense explain
//! - querysense validate

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// querysense - keyword-driven natural-language query gateway
#[derive(Parser, Debug)]
#[command(name = "querysense")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (optional; defaults apply if absent)
        #[arg(long, default_value = "./querysense.json")]
        config: PathBuf,

        /// Port override, wins over file and environment
        #[arg(long)]
        port: Option<u16>,
    },

    /// Translate a query read from stdin and print matching records
    Query,

    /// Explain a query read from stdin
    Explain,

    /// Validate a query read from stdin
    Validate,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
