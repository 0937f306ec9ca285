//! Directory-backed resolver.
//!
//! Each resource lives in its own JSON document named after the identifier,
//! e.g. `acct:alice@example.com.json`. Documents use the JRD layout; a
//! missing `subject` is filled in with the requested identifier.

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::security::{PathPolicy, PathSecurityError};
use crate::domains::resources::{ResolveError, Resource, Resolver};

/// File extension of resource documents.
pub const DOCUMENT_EXTENSION: &str = "json";

/// Longest file name most filesystems accept, in bytes.
const MAX_FILE_NAME_LEN: usize = 255;

/// Resolves identifiers to JSON documents in a directory.
#[derive(Debug, Clone)]
pub struct FileResolver {
    policy: PathPolicy,
}

impl FileResolver {
    /// Create a resolver reading documents from `directory`.
    pub fn new(directory: impl Into<PathBuf>, allow_symlinks: bool) -> Self {
        Self {
            policy: PathPolicy::new(directory, allow_symlinks),
        }
    }

    /// The directory documents are read from.
    pub fn directory(&self) -> &Path {
        self.policy.root()
    }

    /// Path of the document for `resource`, or `None` if the identifier
    /// cannot name a file in the directory.
    pub fn document_path(&self, resource: &str) -> Option<PathBuf> {
        let invalid = resource.is_empty()
            || resource.starts_with('.')
            || resource.contains(['/', '\\', '\0']);
        if invalid {
            return None;
        }

        let file_name = format!("{resource}.{DOCUMENT_EXTENSION}");
        if file_name.len() > MAX_FILE_NAME_LEN {
            return None;
        }
        Some(self.policy.root().join(file_name))
    }
}

#[async_trait]
impl Resolver for FileResolver {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn resolve(&self, resource: &str) -> Result<Resource, ResolveError> {
        let Some(path) = self.document_path(resource) else {
            debug!("Identifier {:?} does not map to a document", resource);
            return Err(ResolveError::not_found(resource));
        };

        let policy = self.policy.clone();
        let resource = resource.to_string();
        tokio::task::spawn_blocking(move || load_document(&policy, &path, &resource))
            .await
            .map_err(|e| ResolveError::other(format!("document loader failed: {e}")))?
    }
}

/// Read and parse a single document. Runs on the blocking pool.
fn load_document(policy: &PathPolicy, path: &Path, resource: &str) -> Result<Resource, ResolveError> {
    let path = match policy.validate(path) {
        Ok(path) => path,
        Err(PathSecurityError::PathNotFound { .. }) => {
            return Err(ResolveError::not_found(resource));
        }
        Err(e) if e.is_escape() => {
            warn!("Refusing document for {}: {}", resource, e);
            return Err(ResolveError::not_found(resource));
        }
        Err(e) => return Err(ResolveError::other(e.to_string())),
    };

    let metadata = std::fs::metadata(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ResolveError::not_found(resource),
        _ => ResolveError::other(format!("unable to stat {}: {e}", path.display())),
    })?;
    if !metadata.is_file() {
        debug!("{} is not a regular file", path.display());
        return Err(ResolveError::not_found(resource));
    }

    let contents = std::fs::read(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ResolveError::not_found(resource),
        _ => ResolveError::other(format!("unable to read {}: {e}", path.display())),
    })?;

    let mut document: Resource = serde_json::from_slice(&contents).map_err(|e| {
        ResolveError::other(format!("invalid resource document {}: {e}", path.display()))
    })?;

    if document.subject.is_empty() {
        document.subject = resource.to_string();
    }

    Ok(document)
}
