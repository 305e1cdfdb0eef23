//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use bookshelf_app::ports::BookRepository;

use crate::state::AppState;

/// Plain-text greeting served at `/`.
pub const WELCOME: &str = "Welcome to my first API with Rust!";

/// Build the top-level axum [`Router`].
///
/// Merges the books API with the welcome and health routes.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: BookRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn welcome() -> &'static str {
    WELCOME
}

async fn health_check() -> &'static str {
    "OK"
}
