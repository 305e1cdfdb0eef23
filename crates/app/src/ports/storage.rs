//! Storage port — whole-collection persistence for books.

use std::future::Future;

use bookshelf_domain::collection::BookCollection;
use bookshelf_domain::error::BookshelfError;

/// Loads and saves the complete [`BookCollection`] as a single unit.
///
/// Implementations hold no cache: every `load` reflects the last
/// successful `save`.
pub trait BookRepository {
    /// Read the whole collection from the backing store.
    fn load(&self) -> impl Future<Output = Result<BookCollection, BookshelfError>> + Send;

    /// Replace the stored collection with `collection`.
    fn save(
        &self,
        collection: &BookCollection,
    ) -> impl Future<Output = Result<(), BookshelfError>> + Send;
}
