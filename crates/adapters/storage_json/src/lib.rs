//! # bookshelf-adapter-storage-json
//!
//! Persistence adapter storing the whole book collection as one JSON file.
//!
//! ## Responsibilities
//! - Implement the [`BookRepository`](bookshelf_app::ports::BookRepository)
//!   port defined in `bookshelf-app::ports::storage`
//! - Read the document fresh on every load (no cache)
//! - Replace the document as a whole on every save, through a temporary
//!   sibling file and a rename
//!
//! ## Dependency rule
//! Depends on `bookshelf-app` (for port traits) and `bookshelf-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod file_repo;

pub use error::StorageError;
pub use file_repo::{Config, JsonFileBookRepository};
