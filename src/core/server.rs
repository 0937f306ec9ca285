//! Server assembly.
//!
//! Wires the configured resolver and the JRD encoder into a
//! [`ResourceHandler`] and carries it, together with the configuration,
//! to the transport.

use std::sync::Arc;
use tracing::info;

use super::Result;
use super::config::Config;
use crate::domains::jrd::JrdEncoder;
use crate::domains::resources::build_resolver;
use crate::domains::webfinger::ResourceHandler;

/// The WebFinger server.
///
/// Cheap to clone; every clone shares the same handler and configuration.
#[derive(Clone)]
pub struct WebFingerServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Handler for discovery requests.
    handler: ResourceHandler,
}

impl WebFingerServer {
    /// Create a new server, building the resolver selected by `config`.
    pub fn new(config: Config) -> Result<Self> {
        let resolver = build_resolver(&config.resolver)?;
        let encoder = Arc::new(JrdEncoder::new().pretty(config.discovery.pretty_json));
        let handler =
            ResourceHandler::new(resolver, encoder).with_rel_filter(config.discovery.rel_filter);

        info!(
            "Handler ready (rel filter {})",
            if handler.rel_filter() { "on" } else { "off" }
        );

        Ok(Self::with_handler(config, handler))
    }

    /// Create a server around an already built handler.
    pub fn with_handler(config: Config, handler: ResourceHandler) -> Self {
        Self {
            config: Arc::new(config),
            handler,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the discovery request handler.
    pub fn handler(&self) -> &ResourceHandler {
        &self.handler
    }
}
