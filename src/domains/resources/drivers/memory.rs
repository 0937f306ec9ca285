//! In-memory resolver.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::core::{Error, Result};
use crate::domains::resources::{ResolveError, Resource, Resolver};

/// Resolves identifiers against a fixed set of resources.
///
/// Each resource is reachable through its subject and each of its aliases.
/// When two resources claim the same identifier, the later one wins.
#[derive(Debug, Clone, Default)]
pub struct MemoryResolver {
    resources: HashMap<String, Arc<Resource>>,
}

impl MemoryResolver {
    /// Create a resolver over the given resources.
    pub fn new(resources: impl IntoIterator<Item = Resource>) -> Self {
        let mut index = HashMap::new();
        for resource in resources {
            let resource = Arc::new(resource);
            for id in resource.identifiers() {
                index.insert(id.to_string(), Arc::clone(&resource));
            }
        }
        Self { resources: index }
    }

    /// Load resources from a JSON file holding an array of resource documents.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read(path)?;
        let resources: Vec<Resource> = serde_json::from_slice(&contents)?;

        if let Some(position) = resources.iter().position(|r| r.subject.is_empty()) {
            return Err(Error::config(format!(
                "resource #{} in {} has no subject",
                position,
                path.display()
            )));
        }

        info!("Loaded {} resources from {}", resources.len(), path.display());
        Ok(Self::new(resources))
    }

    /// Number of identifiers the resolver answers to.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[async_trait]
impl Resolver for MemoryResolver {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn resolve(&self, resource: &str) -> std::result::Result<Resource, ResolveError> {
        self.resources
            .get(resource)
            .map(|r| Resource::clone(r))
            .ok_or_else(|| ResolveError::not_found(resource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::resources::Link;
    use std::fs;
    use tempfile::TempDir;

    fn resolver() -> MemoryResolver {
        MemoryResolver::new([
            Resource::new("acct:alice@example.com")
                .with_alias("https://example.com/alice")
                .with_link(Link::new("self").with_href("https://example.com/users/alice")),
            Resource::new("acct:bob@example.com"),
        ])
    }

    #[tokio::test]
    async fn test_resolves_by_subject() {
        let resource = resolver().resolve("acct:bob@example.com").await.unwrap();
        assert_eq!(resource, Resource::new("acct:bob@example.com"));
    }

    #[tokio::test]
    async fn test_resolves_by_alias() {
        let resource = resolver().resolve("https://example.com/alice").await.unwrap();
        assert_eq!(resource.subject, "acct:alice@example.com");
    }

    #[tokio::test]
    async fn test_unknown_identifier_is_not_found() {
        let err = resolver().resolve("acct:carol@example.com").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "resource acct:carol@example.com not found");
    }

    #[test]
    fn test_index_counts_aliases() {
        assert_eq!(resolver().len(), 3);
        assert!(MemoryResolver::default().is_empty());
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("resources.json");
        fs::write(
            &path,
            r#"[{ "subject": "acct:alice@example.com", "aliases": ["https://example.com/alice"] }]"#,
        )
        .unwrap();

        let resolver = MemoryResolver::from_file(&path).unwrap();
        assert_eq!(resolver.len(), 2);
    }

    #[test]
    fn test_from_file_rejects_missing_subject() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("resources.json");
        fs::write(&path, r#"[{ "aliases": ["https://example.com/alice"] }]"#).unwrap();

        let err = MemoryResolver::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_file_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("resources.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            MemoryResolver::from_file(&path),
            Err(Error::Json(_))
        ));
    }
}
