//! Resolver drivers.
//!
//! Each driver implements [`Resolver`](super::Resolver) over a different
//! backing store. Drivers are selected by configuration in `registry.rs`.

mod file;
mod memory;

pub use file::{DOCUMENT_EXTENSION, FileResolver};
pub use memory::MemoryResolver;
