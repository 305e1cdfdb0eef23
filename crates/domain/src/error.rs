//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`BookshelfError`] via `From`.

use std::error::Error;

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum BookshelfError {
    /// Input rejected before reaching storage.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The backing store could not be read or written.
    #[error("storage unavailable")]
    Storage(#[source] Box<dyn Error + Send + Sync>),
}

/// Input validation failures.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A path or body identifier is not a non-negative integer.
    #[error("invalid id: {0:?}")]
    InvalidId(String),

    /// No unused book id is left to assign.
    #[error("book ids exhausted")]
    IdsExhausted,
}

/// A lookup by id matched nothing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up.
    pub entity: &'static str,
    /// Identifier that missed, rendered for display.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_not_found_message() {
        let err = NotFoundError {
            entity: "Book",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Book with id 42 not found");
    }

    #[test]
    fn should_convert_validation_error_into_bookshelf_error() {
        let err: BookshelfError = ValidationError::InvalidId("abc".to_string()).into();
        assert!(matches!(
            err,
            BookshelfError::Validation(ValidationError::InvalidId(_))
        ));
    }

    #[test]
    fn should_keep_storage_source() {
        let io = std::io::Error::other("disk gone");
        let err = BookshelfError::Storage(Box::new(io));
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("disk gone"));
    }
}
