//! Storage-specific error type wrapping filesystem and JSON errors.

use std::path::PathBuf;

use bookshelf_domain::error::BookshelfError;

/// Errors originating from the JSON file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The document could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be written or moved into place.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid book collection.
    #[error("malformed book document")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for BookshelfError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
