//! HTTP error response mapping.

use std::error::Error;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use bookshelf_domain::error::BookshelfError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`BookshelfError`] and request-body rejections to an HTTP response
/// with appropriate status code and a JSON error body.
pub struct ApiError(Cause);

enum Cause {
    Domain(BookshelfError),
    /// The body could not be extracted; keeps axum's status (400, 415, 422).
    Body(JsonRejection),
}

impl From<BookshelfError> for ApiError {
    fn from(err: BookshelfError) -> Self {
        Self(Cause::Domain(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(Cause::Body(rejection))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            Cause::Body(rejection) => {
                tracing::debug!(status = %rejection.status(), "request body rejected");
                (rejection.status(), rejection.body_text())
            }
            Cause::Domain(BookshelfError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Cause::Domain(BookshelfError::NotFound(err)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            Cause::Domain(BookshelfError::Storage(err)) => {
                tracing::error!(error = %err, cause = ?Error::source(&**err), "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage unavailable".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
