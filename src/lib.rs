//! querysense - a keyword-driven natural-language query gateway
//!
//! Classifies a query by whether it mentions the one known collection and
//! answers with canned pseudo-SQL and the collection's fixed records.

pub mod auth;
pub mod cli;
pub mod http_server;
pub mod intent;
pub mod store;
