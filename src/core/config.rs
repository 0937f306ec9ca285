//! Configuration management for the WebFinger server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

/// Main configuration structure for the WebFinger server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Resolver driver configuration.
    pub resolver: ResolverConfig,

    /// Discovery response behaviour.
    pub discovery: DiscoveryConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server, used in logs.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Which resolver driver backs the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverKind {
    /// One JSON document per resource in a directory.
    #[default]
    File,

    /// All resources loaded into memory from a single JSON file.
    Memory,
}

impl FromStr for DriverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown resolver driver {other:?}")),
        }
    }
}

impl fmt::Display for DriverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Configuration for the resolver driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Selected driver.
    pub driver: DriverKind,

    /// Directory of resource documents (file driver).
    pub resource_dir: PathBuf,

    /// JSON array of resources (memory driver).
    pub resources_file: Option<PathBuf>,

    /// Whether documents may be symlinks. Targets must still stay inside
    /// `resource_dir`.
    pub allow_symlinks: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            driver: DriverKind::File,
            resource_dir: PathBuf::from("resources"),
            resources_file: None,
            allow_symlinks: true,
        }
    }
}

/// Configuration for discovery responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Filter links by the `rel` query parameter (RFC 7033 §4.3).
    pub rel_filter: bool,

    /// Pretty-print descriptor bodies.
    pub pretty_json: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            rel_filter: true,
            pretty_json: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "webfinger-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            resolver: ResolverConfig::default(),
            discovery: DiscoveryConfig::default(),
        }
    }
}

/// Parse a boolean flag the way the rest of the configuration does:
/// anything but `false`/`0` is true.
fn parse_flag(value: &str) -> bool {
    value.to_lowercase() != "false" && value != "0"
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `WEBFINGER_`.
    /// For example: `WEBFINGER_SERVER_NAME`, `WEBFINGER_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("WEBFINGER_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("WEBFINGER_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("WEBFINGER_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = parse_flag(&timestamps);
        }

        config.transport = TransportConfig::from_env();

        if let Ok(driver) = std::env::var("WEBFINGER_DRIVER") {
            match driver.parse() {
                Ok(driver) => config.resolver.driver = driver,
                Err(e) => warn!("{}, falling back to {}", e, config.resolver.driver),
            }
        }

        if let Ok(dir) = std::env::var("WEBFINGER_RESOURCE_DIR") {
            config.resolver.resource_dir = PathBuf::from(dir);
        }

        if let Ok(file) = std::env::var("WEBFINGER_RESOURCES_FILE") {
            config.resolver.resources_file = Some(PathBuf::from(file));
        }

        if let Ok(allow_symlinks) = std::env::var("WEBFINGER_ALLOW_SYMLINKS") {
            config.resolver.allow_symlinks = parse_flag(&allow_symlinks);
            info!("Symlinks allowed: {}", config.resolver.allow_symlinks);
        }

        if let Ok(rel_filter) = std::env::var("WEBFINGER_REL_FILTER") {
            config.discovery.rel_filter = parse_flag(&rel_filter);
            if !config.discovery.rel_filter {
                warn!("rel filtering disabled - all links are returned regardless of rel");
            }
        }

        if let Ok(pretty) = std::env::var("WEBFINGER_PRETTY_JSON") {
            config.discovery.pretty_json = parse_flag(&pretty);
        }

        config
    }
}
