//! JSON REST handlers for books.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use bookshelf_app::ports::BookRepository;
use bookshelf_domain::book::{Book, Fields};
use bookshelf_domain::error::BookshelfError;
use bookshelf_domain::id::BookId;

use crate::error::ApiError;
use crate::state::AppState;

/// Status body returned by mutating endpoints that do not echo the book.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Book>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Book>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Book>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Updated,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Updated => Json(MessageBody {
                message: "Book updated successfully",
            })
            .into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => Json(MessageBody {
                message: "Book deleted successfully",
            })
            .into_response(),
        }
    }
}

fn parse_id(raw: &str) -> Result<BookId, ApiError> {
    raw.parse::<BookId>()
        .map_err(|err| ApiError::from(BookshelfError::from(err)))
}

/// `GET /books`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: BookRepository + Send + Sync + 'static,
{
    let books = state.book_service.list_books().await?;
    Ok(ListResponse::Ok(Json(books)))
}

/// `GET /books/:id`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: BookRepository + Send + Sync + 'static,
{
    let book_id = parse_id(&id)?;
    let book = state.book_service.get_book(book_id).await?;
    Ok(GetResponse::Ok(Json(book)))
}

/// `POST /books`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<Fields>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: BookRepository + Send + Sync + 'static,
{
    let Json(fields) = payload?;
    let created = state.book_service.create_book(fields).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /books/:id`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<Fields>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    R: BookRepository + Send + Sync + 'static,
{
    let book_id = parse_id(&id)?;
    let Json(patch) = payload?;
    state.book_service.update_book(book_id, patch).await?;
    Ok(UpdateResponse::Updated)
}

/// `DELETE /books/:id`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: BookRepository + Send + Sync + 'static,
{
    let book_id = parse_id(&id)?;
    state.book_service.delete_book(book_id).await?;
    Ok(DeleteResponse::Deleted)
}
