//! Error types for `dirhop-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.

use std::path::{Path, PathBuf};

/// Unified error type for all core operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory was expected but the path points to something else.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A regular file was expected (e.g. for a preview) but the path is a
    /// directory, FIFO, socket or device.
    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `dirhop-core`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Coarse classification of a failed load, as surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    NotFound,
    PermissionDenied,
    Other,
}

impl CoreError {
    /// Maps an I/O error for `path` onto the path-carrying variants where possible.
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io(err),
        }
    }

    /// Returns the load-error class of this error.
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            Self::NotFound(_) => LoadErrorKind::NotFound,
            Self::PermissionDenied(_) => LoadErrorKind::PermissionDenied,
            Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound => LoadErrorKind::NotFound,
            Self::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                LoadErrorKind::PermissionDenied
            }
            _ => LoadErrorKind::Other,
        }
    }
}
