//! JSON-file implementation of [`BookRepository`].

use std::ffi::OsString;
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bookshelf_app::ports::BookRepository;
use bookshelf_domain::collection::BookCollection;
use bookshelf_domain::error::BookshelfError;

use crate::error::StorageError;

/// Configuration for the JSON file storage adapter.
pub struct Config {
    /// Location of the document (e.g. `db.json`).
    pub path: PathBuf,
}

impl Config {
    /// Build a [`JsonFileBookRepository`] from this configuration.
    ///
    /// Creates the parent directory if missing and, when the document
    /// already exists, checks that it parses so a corrupt file is reported
    /// at startup instead of on the first request.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the directory cannot be created or the
    /// existing document is unreadable.
    pub async fn build(self) -> Result<JsonFileBookRepository, StorageError> {
        JsonFileBookRepository::initialize(self.path).await
    }
}

/// Book repository backed by a single JSON document on disk.
pub struct JsonFileBookRepository {
    path: PathBuf,
}

impl JsonFileBookRepository {
    /// Create a repository for `path` without touching the filesystem.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn initialize(path: PathBuf) -> Result<Self, StorageError> {
        ensure_parent(&path).await?;
        let existing = read_collection(&path).await?;
        tracing::debug!(path = %path.display(), books = existing.len(), "book document ready");
        Ok(Self { path })
    }

    /// Location of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookRepository for JsonFileBookRepository {
    fn load(&self) -> impl Future<Output = Result<BookCollection, BookshelfError>> + Send {
        let path = self.path.clone();
        async move {
            let collection = read_collection(&path).await?;
            Ok(collection)
        }
    }

    fn save(
        &self,
        collection: &BookCollection,
    ) -> impl Future<Output = Result<(), BookshelfError>> + Send {
        let path = self.path.clone();
        let encoded = serde_json::to_vec_pretty(collection);
        let books = collection.len();
        async move {
            let bytes = encoded.map_err(StorageError::from)?;
            write_replacing(&path, &bytes).await?;
            tracing::debug!(path = %path.display(), books, "book document saved");
            Ok(())
        }
    }
}

/// Read and parse the document. A missing or blank file is an empty collection.
async fn read_collection(path: &Path) -> Result<BookCollection, StorageError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "book document missing, starting empty");
            return Ok(BookCollection::new());
        }
        Err(source) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(BookCollection::new());
    }

    let collection: BookCollection = serde_json::from_slice(&bytes)?;
    tracing::debug!(path = %path.display(), books = collection.len(), "book document loaded");
    Ok(collection)
}

/// Write `bytes` next to `path`, then rename over it.
async fn write_replacing(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    let tmp = tmp_path(path);
    let write_err = |source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };

    tokio::fs::write(&tmp, bytes).await.map_err(write_err)?;
    if let Err(source) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(write_err(source));
    }
    Ok(())
}

async fn ensure_parent(path: &Path) -> Result<(), StorageError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| StorageError::Write {
                path: parent.to_path_buf(),
                source,
            }),
        _ => Ok(()),
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(|| OsString::from("books"), ToOwned::to_owned);
    name.push(".tmp");
    path.with_file_name(name)
}
