//! Shared application state for axum handlers.

use std::sync::Arc;

use bookshelf_app::ports::BookRepository;
use bookshelf_app::services::book_service::BookService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Book CRUD service.
    pub book_service: Arc<BookService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            book_service: Arc::clone(&self.book_service),
        }
    }
}

impl<R> AppState<R>
where
    R: BookRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(book_service: BookService<R>) -> Self {
        Self {
            book_service: Arc::new(book_service),
        }
    }
}
