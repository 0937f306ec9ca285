use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur during path validation
#[derive(Debug, thiserror::Error)]
pub enum PathSecurityError {
    #[error("Path '{path}' is outside allowed root directory '{root}'")]
    OutsideRootDirectory { path: PathBuf, root: PathBuf },

    #[error("Symlink '{path}' points outside allowed root directory")]
    SymlinkOutsideRoot { path: PathBuf },

    #[error("Symlink '{path}' rejected: symlinks are disabled")]
    SymlinkNotAllowed { path: PathBuf },

    #[error("Cannot canonicalize path '{path}': {error}")]
    CannotCanonicalize { path: PathBuf, error: io::Error },

    #[error("Path does not exist: '{path}'")]
    PathNotFound { path: PathBuf },

    #[error("IO error for path '{path}': {error}")]
    IoError { path: PathBuf, error: io::Error },
}

impl PathSecurityError {
    /// Whether the error means the path escapes the root, as opposed to an I/O problem.
    pub fn is_escape(&self) -> bool {
        matches!(
            self,
            Self::OutsideRootDirectory { .. }
                | Self::SymlinkOutsideRoot { .. }
                | Self::SymlinkNotAllowed { .. }
        )
    }
}

/// Confines file lookups to a root directory.
#[derive(Debug, Clone)]
pub struct PathPolicy {
    root: PathBuf,
    allow_symlinks: bool,
}

impl PathPolicy {
    /// Create a policy rooted at `root`.
    pub fn new(root: impl Into<PathBuf>, allow_symlinks: bool) -> Self {
        Self {
            root: root.into(),
            allow_symlinks,
        }
    }

    /// The configured root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validates that `path` exists and resolves to a location inside the root.
    ///
    /// 1. Canonicalizes the root
    /// 2. Rejects symlinks when they are disabled, or when they point outside the root
    /// 3. Canonicalizes `path` and checks it is within the root
    ///
    /// Returns the canonical path on success.
    pub fn validate(&self, path: &Path) -> Result<PathBuf, PathSecurityError> {
        let canonical_root = self
            .root
            .canonicalize()
            .map_err(|e| PathSecurityError::IoError {
                path: self.root.clone(),
                error: e,
            })?;

        // symlink_metadata does not follow the link, so a dangling link still "exists"
        let metadata = path.symlink_metadata().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                PathSecurityError::PathNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                PathSecurityError::IoError {
                    path: path.to_path_buf(),
                    error: e,
                }
            }
        })?;

        if metadata.file_type().is_symlink() {
            if !self.allow_symlinks {
                return Err(PathSecurityError::SymlinkNotAllowed {
                    path: path.to_path_buf(),
                });
            }

            let canonical_target =
                canonicalize_path(path).map_err(|_| PathSecurityError::SymlinkOutsideRoot {
                    path: path.to_path_buf(),
                })?;

            if !is_within_root(&canonical_target, &canonical_root) {
                return Err(PathSecurityError::SymlinkOutsideRoot {
                    path: path.to_path_buf(),
                });
            }
        }

        let canonical_path = canonicalize_path(path)?;

        if !is_within_root(&canonical_path, &canonical_root) {
            return Err(PathSecurityError::OutsideRootDirectory {
                path: canonical_path,
                root: canonical_root,
            });
        }

        Ok(canonical_path)
    }
}

/// Checks if a path is within (or equal to) a root directory
fn is_within_root(path: &Path, root: &Path) -> bool {
    path.starts_with(root)
}

fn canonicalize_path(path: &Path) -> Result<PathBuf, PathSecurityError> {
    path.canonicalize().map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            PathSecurityError::PathNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PathSecurityError::CannotCanonicalize {
                path: path.to_path_buf(),
                error: e,
            }
        }
    })
}
