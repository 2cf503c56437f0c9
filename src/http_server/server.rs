//! # HTTP Server
//!
//! Main HTTP server combining the query and health routers.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::auth::AccessGuard;
use crate::intent::QueryEngine;
use crate::store::RecordStore;

use super::config::{ConfigError, HttpServerConfig};
use super::observability_routes::health_routes;
use super::query_routes::query_routes;

/// HTTP server for the query gateway
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Build a server around an already-seeded store.
    ///
    /// Fails when the config carries no usable shared secret.
    pub fn with_config(config: HttpServerConfig, store: RecordStore) -> Result<Self, ConfigError> {
        let guard = Arc::new(AccessGuard::new(config.shared_secret()?));
        let engine = Arc::new(QueryEngine::new(Arc::new(store)));
        let router = build_router(engine, guard, &config.cors_origins);
        Ok(Self { config, router })
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Bind and serve until the listener fails
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        info!(%addr, "querysense listening");
        info!("endpoints: POST /query, POST /explain, POST /validate, GET /health");

        axum::serve(listener, self.router).await
    }
}

/// Build the combined router. Exposed so tests can drive it in-process.
pub fn build_router(
    engine: Arc<QueryEngine>,
    guard: Arc<AccessGuard>,
    cors_origins: &[String],
) -> Router {
    let cors = if cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(health_routes())
        .merge(query_routes(engine, guard))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
