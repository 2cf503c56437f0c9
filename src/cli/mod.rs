//! CLI module for querysense
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP gateway
//! - query: One-shot translation with matching records
//! - explain: One-shot explanation
//! - validate: One-shot feasibility check

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    explain, query, resolve_config, run, run_command, run_explain, run_query, run_validate, serve,
    validate,
};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{parse_request, read_request_from, write_error_to, write_json_to};
