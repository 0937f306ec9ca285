//! Domain modules containing the business logic of the server.
//!
//! - **resources**: the resource model and the resolvers that produce it
//! - **jrd**: encoding of resources into JSON Resource Descriptors
//! - **webfinger**: the discovery request handler

pub mod jrd;
pub mod resources;
pub mod webfinger;
