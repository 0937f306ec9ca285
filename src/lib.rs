//! WebFinger Server Library
//!
//! This crate implements the server side of WebFinger (RFC 7033): given a
//! `resource` identifier such as `acct:alice@example.com`, it answers with
//! a JSON Resource Descriptor or a precise error status.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, server assembly and the HTTP transport
//! - **domains**: business logic organized by bounded contexts
//!   - **resources**: the resource model and pluggable resolvers
//!   - **jrd**: encoding resources into descriptor payloads
//!   - **webfinger**: the discovery request handler
//!
//! # Example
//!
//! ```rust,no_run
//! use webfinger_server::core::{Config, TransportService, WebFingerServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = WebFingerServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, WebFingerServer};
