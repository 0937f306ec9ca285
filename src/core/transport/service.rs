//! Transport service - starts the server on the configured transport.

use tracing::info;

use super::http::HttpTransport;
use super::{TransportConfig, TransportResult};
use crate::core::WebFingerServer;

/// Transport service - manages the transport layer for the server.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Log information about the configured transport.
    pub fn log_info(&self) {
        info!("Starting transport: {}", self.config.description());
    }

    /// Start the transport with the given server.
    ///
    /// This method blocks until the transport is shut down.
    pub async fn run(self, server: WebFingerServer) -> TransportResult<()> {
        self.log_info();
        HttpTransport::new(self.config).run(server).await
    }
}
