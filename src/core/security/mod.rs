// Security module for path validation
//
// Resource drivers that read from disk confine every lookup to their
// configured directory through `PathPolicy`.

pub mod path_validator;

pub use path_validator::{PathPolicy, PathSecurityError};
