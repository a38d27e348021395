//! Skill-specific error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading skill artifacts.
#[derive(Debug, Error)]
pub enum SkillError {
    /// The artifact does not exist.
    #[error("file '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// Any other I/O failure (permissions, invalid UTF-8, ...).
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SkillError {
    /// Classify an I/O error raised for `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path)
        } else {
            Self::Read { path, source }
        }
    }

    /// Whether this error means the artifact is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
