//! The resolver capability.

use async_trait::async_trait;

use super::error::ResolveError;
use super::model::Resource;

/// Looks up the resource behind an identifier.
///
/// Implementations are shared across concurrent requests behind an `Arc`
/// and are responsible for their own synchronization. Each call returns a
/// freshly built [`Resource`].
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Resolve `resource` (e.g. `acct:alice@example.com`).
    async fn resolve(&self, resource: &str) -> Result<Resource, ResolveError>;
}
