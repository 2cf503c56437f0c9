//! CLI command implementations
//!
//! `serve` boots the HTTP gateway. The one-shot commands run the same
//! engine operation in-process on a request read from stdin and print the
//! body the HTTP endpoint would return. They skip the access guard: the
//! caller already has local access.

use std::io::{self, Read, Write};
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::http_server::errors::InvalidQueryResponse;
use crate::http_server::query_routes::ValidResponse;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::intent::QueryEngine;
use crate::store::RecordStore;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_request_from, write_error_to, write_json_to};

/// Parse arguments and run
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Query => query(),
        Command::Explain => explain(),
        Command::Validate => validate(),
    }
}

fn init_tracing() {
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,querysense=debug")),
        )
        .try_init();
}

/// Resolve configuration: file, then environment, then `--port`
pub fn resolve_config(config_path: &Path, port: Option<u16>) -> CliResult<HttpServerConfig> {
    let mut config = HttpServerConfig::load(config_path)?.with_env_overrides()?;
    if let Some(port) = port {
        config.port = port;
    }
    Ok(config)
}

/// Start the HTTP server and block until it stops
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    init_tracing();

    let config = resolve_config(config_path, port)?;
    info!(?config, "configuration loaded");

    let store = RecordStore::seeded()?;
    info!(
        collection = store.collection_name(),
        records = store.records().len(),
        "record store seeded"
    );

    let server = HttpServer::with_config(config, store)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Read the request, reporting a bad body on the output as well
fn read_or_report<R: Read, W: Write>(input: R, output: &mut W) -> CliResult<String> {
    match read_request_from(input) {
        Ok(request) => Ok(request.query),
        Err(e) => {
            write_error_to(&mut *output, e.code_str(), e.message())?;
            Err(e)
        }
    }
}

/// `query` over an arbitrary reader/writer pair
pub fn run_query<R: Read, W: Write>(
    engine: &QueryEngine,
    input: R,
    mut output: W,
) -> CliResult<()> {
    let text = read_or_report(input, &mut output)?;
    write_json_to(output, &engine.query(&text))
}

/// `explain` over an arbitrary reader/writer pair
pub fn run_explain<R: Read, W: Write>(
    engine: &QueryEngine,
    input: R,
    mut output: W,
) -> CliResult<()> {
    let text = read_or_report(input, &mut output)?;
    write_json_to(output, &engine.explain(&text))
}

/// `validate` over an arbitrary reader/writer pair. An infeasible query is
/// printed, not raised.
pub fn run_validate<R: Read, W: Write>(
    engine: &QueryEngine,
    input: R,
    mut output: W,
) -> CliResult<()> {
    let text = read_or_report(input, &mut output)?;
    let validation = engine.validate(&text);

    if validation.valid {
        write_json_to(
            output,
            &ValidResponse {
                valid: true,
                message: validation.detail,
            },
        )
    } else {
        write_json_to(
            output,
            &InvalidQueryResponse {
                valid: false,
                error: validation.detail,
            },
        )
    }
}

/// One-shot `query` on stdin/stdout
pub fn query() -> CliResult<()> {
    run_query(&QueryEngine::seeded()?, io::stdin().lock(), io::stdout().lock())
}

/// One-shot `explain` on stdin/stdout
pub fn explain() -> CliResult<()> {
    run_explain(&QueryEngine::seeded()?, io::stdin().lock(), io::stdout().lock())
}

/// One-shot `validate` on stdin/stdout
pub fn validate() -> CliResult<()> {
    run_validate(&QueryEngine::seeded()?, io::stdin().lock(), io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn run_one_shot(
        command: fn(&QueryEngine, &[u8], &mut Vec<u8>) -> CliResult<()>,
        input: &str,
    ) -> (CliResult<()>, serde_json::Value) {
        let engine = QueryEngine::seeded().unwrap();
        let mut output = Vec::new();
        let result = command(&engine, input.as_bytes(), &mut output);
        let value = serde_json::from_slice(&output).unwrap();
        (result, value)
    }

    #[test]
    fn test_query_prints_records() {
        let (result, value) = run_one_shot(
            |e, i, o| run_query(e, i, o),
            r#"{"query": "Show all sales records"}"#,
        );
        assert!(result.is_ok());
        assert_eq!(value["translated_query"], "SELECT * FROM sales");
        assert_eq!(value["result"].as_array().unwrap().len(), 3);
        assert_eq!(value["result"][0], json!({"id": 1, "item": "Laptop", "price": 1500}));
    }

    #[test]
    fn test_explain_prints_explanation() {
        let (result, value) = run_one_shot(|e, i, o| run_explain(e, i, o), r#"{"query": "sales data"}"#);
        assert!(result.is_ok());
        assert_eq!(
            value,
            json!({
                "original_query": "sales data",
                "detected_table": "sales",
                "translated_query": "SELECT * FROM sales"
            })
        );
    }

    #[test]
    fn test_validate_feasible_prints_message() {
        let (result, value) = run_one_shot(|e, i, o| run_validate(e, i, o), r#"{"query": "SALES"}"#);
        assert!(result.is_ok());
        assert_eq!(value, json!({"valid": true, "message": "Query is feasible"}));
    }

    #[test]
    fn test_validate_infeasible_prints_error_and_succeeds() {
        let (result, value) = run_one_shot(|e, i, o| run_validate(e, i, o), r#"{"query": "inventory"}"#);
        assert!(result.is_ok());
        assert_eq!(
            value,
            json!({"valid": false, "error": "Query does not reference any known table."})
        );
    }

    #[test]
    fn test_missing_field_prints_envelope_and_fails() {
        let commands: [fn(&QueryEngine, &[u8], &mut Vec<u8>) -> CliResult<()>; 3] = [
            |e, i, o| run_query(e, i, o),
            |e, i, o| run_explain(e, i, o),
            |e, i, o| run_validate(e, i, o),
        ];
        for command in commands {
            let (result, value) = run_one_shot(command, "{}");
            let err = result.unwrap_err();
            assert_eq!(err.code_str(), "QSENSE_CLI_BAD_REQUEST");
            assert_eq!(
                value,
                json!({
                    "status": "error",
                    "code": "QSENSE_CLI_BAD_REQUEST",
                    "message": "Missing 'query' parameter"
                })
            );
        }
    }

    #[test]
    fn test_resolve_config_port_flag_wins() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("querysense.json");
        fs::write(&path, r#"{"port": 9001, "shared_secret": "abc"}"#).unwrap();

        let config = resolve_config(&path, Some(9100)).unwrap();
        assert_eq!(config.port, 9100);
    }

    #[test]
    fn test_resolve_config_bad_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("querysense.json");
        fs::write(&path, "[").unwrap();

        let err = resolve_config(&path, None).unwrap_err();
        assert_eq!(err.code_str(), "QSENSE_CLI_CONFIG_ERROR");
    }
}
