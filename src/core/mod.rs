//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the server,
//! including error handling, configuration, server assembly, path security
//! and the HTTP transport.

pub mod config;
pub mod error;
pub mod security;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use security::{PathPolicy, PathSecurityError};
pub use server::WebFingerServer;
pub use transport::{TransportConfig, TransportService};
