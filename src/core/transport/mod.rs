//! Transport layer for the WebFinger server.
//!
//! Serves the discovery endpoint over HTTP. TLS termination is expected to
//! happen in front of the server (reverse proxy or load balancer); RFC 7033
//! requires clients to reach the endpoint over HTTPS.

mod config;
mod error;
mod service;

pub mod http;

pub use config::{TransportConfig, WELL_KNOWN_PATH};
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
