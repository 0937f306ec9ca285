//! WebFinger domain module.
//!
//! Implements the request/response contract of RFC 7033: validate the
//! request, resolve the `resource`, encode the result as a JRD, and map
//! every failure to the right status code.
//!
//! ## Architecture
//!
//! - `query.rs` - `ResourceQuery` parsing and validation
//! - `handler.rs` - `ResourceHandler`, the request pipeline
//! - `response.rs` - `HandlerFailure`, the status-mapping table

mod handler;
mod query;
mod response;

pub use handler::ResourceHandler;
pub use query::{QueryError, REL_PARAM, RESOURCE_PARAM, ResourceQuery};
pub use response::{DescriptorResponse, HandlerFailure};
