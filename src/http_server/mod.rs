//! # querysense HTTP Server Module
//!
//! Combines the guarded query routes and the health route into one Axum
//! server.
//!
//! # Endpoints
//!
//! - `/health` - Health check (no credential)
//! - `/query` - Pseudo-SQL translation plus matching records
//! - `/explain` - Interpretation breakdown
//! - `/validate` - Feasibility check

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod query_routes;
pub mod server;

pub use config::{ConfigError, HttpServerConfig};
pub use errors::{ApiError, ApiResult};
pub use server::{build_router, HttpServer};
