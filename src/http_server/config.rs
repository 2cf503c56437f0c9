//! HTTP Server Configuration
//!
//! Bind address, CORS origins and the shared secret. Values come from an
//! optional JSON file and may be overridden from the environment.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::{AuthError, SharedSecret};

/// Overrides `shared_secret`
pub const ENV_SHARED_SECRET: &str = "QUERYSENSE_SHARED_SECRET";
/// Overrides `port`
pub const ENV_PORT: &str = "QUERYSENSE_PORT";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid QUERYSENSE_PORT value: '{0}'")]
    InvalidPort(String),

    #[error("No shared secret configured (set `shared_secret` or QUERYSENSE_SHARED_SECRET)")]
    MissingSecret,

    #[error("{0}")]
    Secret(#[from] AuthError),
}

/// HTTP server configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 5000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: empty, meaning permissive)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Value the `Authorization` header must equal
    #[serde(default)]
    pub shared_secret: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            shared_secret: None,
        }
    }
}

impl fmt::Debug for HttpServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("cors_origins", &self.cors_origins)
            .field("shared_secret", &self.shared_secret.as_ref().map(|_| "***"))
            .finish()
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Read a JSON config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(secret) = lookup(ENV_SHARED_SECRET) {
            self.shared_secret = Some(secret);
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        Ok(self)
    }

    /// The configured secret, validated as non-empty
    pub fn shared_secret(&self) -> Result<SharedSecret, ConfigError> {
        let secret = self
            .shared_secret
            .as_deref()
            .ok_or(ConfigError::MissingSecret)?;
        Ok(SharedSecret::new(secret)?)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
