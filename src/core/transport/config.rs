//! Transport configuration types.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

use super::{TransportError, TransportResult};

/// The path RFC 7033 reserves for WebFinger.
pub const WELL_KNOWN_PATH: &str = "/.well-known/webfinger";

/// HTTP transport configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path the discovery endpoint is served on.
    #[serde(default = "default_path")]
    pub path: String,

    /// Send CORS headers. RFC 7033 §5 asks servers to allow any origin.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,

    /// Per-request deadline in seconds. 0 disables it.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_path() -> String {
    WELL_KNOWN_PATH.to_string()
}

fn default_cors() -> bool {
    true
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: default_host(),
            path: default_path(),
            enable_cors: default_cors(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl TransportConfig {
    /// Create an HTTP transport config on the given address.
    pub fn http(port: u16, host: impl Into<String>) -> Self {
        Self {
            port,
            host: host.into(),
            ..Default::default()
        }
    }

    /// Load transport config from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(port) = std::env::var("WEBFINGER_HTTP_PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!("Ignoring invalid WEBFINGER_HTTP_PORT {:?}", port),
            }
        }

        if let Ok(host) = std::env::var("WEBFINGER_HTTP_HOST") {
            config.host = host;
        }

        if let Ok(path) = std::env::var("WEBFINGER_HTTP_PATH") {
            config.path = path;
        }

        if let Ok(cors) = std::env::var("WEBFINGER_HTTP_CORS") {
            config.enable_cors = cors.to_lowercase() != "false" && cors != "0";
        }

        if let Ok(timeout) = std::env::var("WEBFINGER_REQUEST_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.request_timeout_secs = secs,
                Err(_) => warn!("Ignoring invalid WEBFINGER_REQUEST_TIMEOUT_SECS {:?}", timeout),
            }
        }

        config
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The request deadline, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    /// Check the configuration can be served.
    pub fn validate(&self) -> TransportResult<()> {
        if !self.path.starts_with('/') {
            return Err(TransportError::invalid_config(format!(
                "discovery path {:?} must start with '/'",
                self.path
            )));
        }
        if self.path == "/health" {
            return Err(TransportError::invalid_config(
                "discovery path conflicts with the health endpoint",
            ));
        }
        Ok(())
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        format!("HTTP on {}:{}{}", self.host, self.port, self.path)
    }
}
