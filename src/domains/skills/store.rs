//! Read-only access to on-disk skill artifacts.
//!
//! Every read goes straight to the filesystem. Nothing is cached between
//! calls and file handles never outlive the call that opened them.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::SkillError;

/// What to do when an artifact cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Turn the failure into a successful, human-readable error text.
    /// Used when the path came from the caller.
    ReturnErrorText,

    /// Hand the failure back to the caller as an error.
    /// Used for bundled assets whose absence is an installation defect.
    Propagate,
}

/// Which children of a directory to enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFilter<'a> {
    /// Only subdirectories.
    Directories,

    /// Only regular files whose name ends with the given suffix (e.g. `.ttf`).
    FilesWithExtension(&'a str),
}

impl EntryFilter<'_> {
    fn accepts(&self, path: &Path, name: &str) -> bool {
        match self {
            Self::Directories => path.is_dir(),
            Self::FilesWithExtension(ext) => name.ends_with(ext) && path.is_file(),
        }
    }
}

/// Read a whole file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String, SkillError> {
    fs::read_to_string(path).map_err(|e| SkillError::from_io(path, e))
}

/// Read a file, applying `policy` to any failure.
pub fn read_with_policy(path: &Path, policy: MissingPolicy) -> Result<String, SkillError> {
    match read_text(path) {
        Ok(content) => Ok(content),
        Err(e) => match policy {
            MissingPolicy::ReturnErrorText => {
                warn!("Returning read failure as text: {}", e);
                Ok(format!("Error: {}", e))
            }
            MissingPolicy::Propagate => Err(e),
        },
    }
}

/// A directory tree of named skill folders.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at `root`. The directory is not touched until
    /// the first read.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a path relative to the store root.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Read the artifact at `relative`.
    pub fn read(
        &self,
        relative: impl AsRef<Path>,
        policy: MissingPolicy,
    ) -> Result<String, SkillError> {
        let path = self.path(relative);
        debug!("Reading artifact {}", path.display());
        read_with_policy(&path, policy)
    }

    /// List the immediate children of `relative` accepted by `filter`,
    /// sorted by name.
    pub fn list_entries(
        &self,
        relative: impl AsRef<Path>,
        filter: EntryFilter<'_>,
    ) -> Result<Vec<String>, SkillError> {
        let dir = self.path(relative);
        let entries = fs::read_dir(&dir).map_err(|e| SkillError::from_io(&dir, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Error reading entry in {}: {}", dir.display(), e);
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            if filter.accepts(&entry.path(), &name) {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }
}
