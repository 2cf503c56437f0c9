//! JSON I/O handling for one-shot commands
//!
//! - Input: single JSON object `{"query": string}` (stdin in practice)
//! - Output: single JSON object line (stdout in practice)
//! - UTF-8 only

use std::io::{Read, Write};

use serde::Serialize;

use crate::http_server::errors::ApiError;
use crate::http_server::query_routes::QueryRequest;

use super::errors::{CliError, CliResult};

/// Read a query request from any reader
pub fn read_request_from<R: Read>(mut reader: R) -> CliResult<QueryRequest> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    parse_request(&input)
}

/// Parse a request body with the same rules the HTTP handlers use
pub fn parse_request(input: &[u8]) -> CliResult<QueryRequest> {
    QueryRequest::from_body(input).map_err(|e: ApiError| CliError::bad_request(e.to_string()))
}

/// Write a value as one JSON line
pub fn write_json_to<W: Write, T: Serialize>(mut writer: W, value: &T) -> CliResult<()> {
    serde_json::to_writer(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

/// Write an error envelope
pub fn write_error_to<W: Write>(writer: W, code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    write_json_to(writer, &response)
}
