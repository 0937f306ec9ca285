//! Driver registry - builds the configured resolver.

use std::sync::Arc;
use tracing::info;

use super::Resolver;
use super::drivers::{FileResolver, MemoryResolver};
use crate::core::config::{DriverKind, ResolverConfig};
use crate::core::{Error, Result};

/// Build the resolver selected by `config`.
pub fn build_resolver(config: &ResolverConfig) -> Result<Arc<dyn Resolver>> {
    let resolver: Arc<dyn Resolver> = match config.driver {
        DriverKind::File => {
            if !config.resource_dir.is_dir() {
                return Err(Error::config(format!(
                    "resource directory {} does not exist",
                    config.resource_dir.display()
                )));
            }
            Arc::new(FileResolver::new(
                config.resource_dir.clone(),
                config.allow_symlinks,
            ))
        }
        DriverKind::Memory => {
            let path = config.resources_file.as_deref().ok_or_else(|| {
                Error::config("the memory driver needs WEBFINGER_RESOURCES_FILE")
            })?;
            Arc::new(MemoryResolver::from_file(path)?)
        }
    };

    info!("Using {} resolver", resolver.name());
    Ok(resolver)
}
