//! Text sources that supply directive files by path
//!
//! Paths are relative to a root directory (the host's workspace). A source
//! either returns the whole file or fails; there is no partial read.

use std::io;
use std::path::{Path, PathBuf};

/// Supplies directive text for a path
pub trait TextSource {
    fn read(&self, path: &str) -> Result<String, SourceError>;
}

/// Reads directive files from disk, relative to a root directory
#[derive(Debug, Clone)]
pub struct FsTextSource {
    root: PathBuf,
}

impl FsTextSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Source rooted at the process working directory
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute or root-relative location of `path`
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl TextSource for FsTextSource {
    fn read(&self, path: &str) -> Result<String, SourceError> {
        let full = self.resolve(path);
        match std::fs::read_to_string(&full) {
            Ok(content) => {
                tracing::debug!("Read file {}", full.display());
                Ok(content)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(SourceError::NotFound(path.to_string()))
            }
            Err(e) => Err(SourceError::ReadError {
                path: path.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

/// Errors that can occur when obtaining directive text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    NotFound(String),
    ReadError { path: String, message: String },
}

impl SourceError {
    /// The path that could not be read
    pub fn path(&self) -> &str {
        match self {
            SourceError::NotFound(path) => path,
            SourceError::ReadError { path, .. } => path,
        }
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::NotFound(path) => write!(f, "File not found: {}", path),
            SourceError::ReadError { path, message } => {
                write!(f, "Failed to read file {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for SourceError {}
