//! Style loading errors.

use std::io;
use std::path::{Path, PathBuf};

/// Result alias for style injection.
pub type Result<T, E = StyleError> = std::result::Result<T, E>;

/// Error returned when a stylesheet cannot be applied.
///
/// The underlying [`io::Error`] is kept as the error source so callers see
/// exactly what the file system reported.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StyleError {
    /// No resource exists at the configured path.
    #[error("stylesheet not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The resource exists but could not be read as text.
    #[error("stylesheet \"{}\" could not be read: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The render surface rejected the markup.
    #[error("render surface failed: {source}")]
    Render {
        #[source]
        source: io::Error,
    },
}

impl StyleError {
    /// Classifies a read failure for `path`.
    pub(crate) fn from_read(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => StyleError::NotFound { path, source },
            _ => StyleError::Unreadable { path, source },
        }
    }

    /// The stylesheet path involved, if the error came from reading it.
    pub fn path(&self) -> Option<&Path> {
        match self {
            StyleError::NotFound { path, .. } | StyleError::Unreadable { path, .. } => Some(path),
            StyleError::Render { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StyleError::NotFound { .. })
    }

    pub fn is_unreadable(&self) -> bool {
        matches!(self, StyleError::Unreadable { .. })
    }
}
