//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod books;

use axum::Router;
use axum::routing::get;

use bookshelf_app::ports::BookRepository;

use crate::state::AppState;

/// Build the books sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: BookRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/books", get(books::list::<R>).post(books::create::<R>))
        .route(
            "/books/{id}",
            get(books::get::<R>)
                .put(books::update::<R>)
                .delete(books::delete::<R>),
        )
}
