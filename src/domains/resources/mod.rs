//! Resources domain module.
//!
//! This module turns resource identifiers into resource data. The request
//! handler only sees the [`Resolver`] trait; concrete backing stores live
//! in `drivers/`.
//!
//! ## Architecture
//!
//! - `model.rs` - `Resource` and `Link`, in JRD layout
//! - `resolver.rs` - the `Resolver` capability
//! - `error.rs` - `ResolveError`, the tagged not-found/other outcome
//! - `drivers/` - resolver implementations (one file per driver)
//! - `registry.rs` - selects a driver from configuration
//!
//! ## Adding a New Driver
//!
//! 1. Create a new file in `drivers/` implementing `Resolver`
//! 2. Export it in `drivers/mod.rs`
//! 3. Add a `DriverKind` variant and wire it up in `registry.rs`

pub mod drivers;
mod error;
mod model;
mod registry;
mod resolver;

pub use drivers::{FileResolver, MemoryResolver};
pub use error::ResolveError;
pub use model::{Link, Resource};
pub use registry::build_resolver;
pub use resolver::Resolver;
