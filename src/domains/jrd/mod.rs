//! JRD domain module.
//!
//! Encodes resolved resources into JSON Resource Descriptor payloads. The
//! handler depends on the [`DescriptorEncoder`] trait so the encoding can be
//! swapped out, e.g. for a failing encoder in tests.

mod encoder;
mod error;

pub use encoder::{DescriptorEncoder, EncodedDescriptor, JRD_CONTENT_TYPE, JrdEncoder};
pub use error::EncodeError;
