//! Book collection — the ordered set of books persisted as one document.
//!
//! The document layout is `{"books": [...], "next_id": N}`. `next_id` is
//! optional on read so documents written without a counter still load.

use serde::{Deserialize, Serialize};

use crate::book::{Book, Fields};
use crate::error::{NotFoundError, ValidationError};
use crate::id::BookId;

/// The full collection of books, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookCollection {
    #[serde(default)]
    books: Vec<Book>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next_id: Option<BookId>,
}

impl BookCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All books, in insertion order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Consume the collection and return its books.
    #[must_use]
    pub fn into_books(self) -> Vec<Book> {
        self.books
    }

    /// Number of books held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the collection holds no book.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// First book whose id equals `id`.
    #[must_use]
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    /// Id the next inserted book will receive.
    ///
    /// Never lower than one past the highest id currently stored, so a
    /// missing or stale counter cannot produce a duplicate.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IdsExhausted`] when a stored book already
    /// holds [`BookId::MAX`].
    pub fn peek_next_id(&self) -> Result<BookId, ValidationError> {
        let after_max = match self.books.iter().map(|book| book.id).max() {
            Some(max) => max.next().ok_or(ValidationError::IdsExhausted)?,
            None => BookId::FIRST,
        };
        Ok(self.next_id.map_or(after_max, |next| next.max(after_max)))
    }

    /// Append a new book built from `fields` and return it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IdsExhausted`] when no id is left; the
    /// collection is left untouched.
    pub fn insert(&mut self, fields: Fields) -> Result<&Book, ValidationError> {
        let id = self.peek_next_id()?;
        // BookId::MAX is never assigned so the counter can always move past it.
        let next = id.next().ok_or(ValidationError::IdsExhausted)?;
        self.next_id = Some(next);
        let index = self.books.len();
        self.books.push(Book::new(id, fields));
        Ok(&self.books[index])
    }

    /// Shallow-merge `patch` into the first book matching `id`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when no book has that id; the collection
    /// is left untouched.
    pub fn merge(&mut self, id: BookId, patch: Fields) -> Result<&Book, NotFoundError> {
        let index = self.position(id).ok_or_else(|| not_found(id))?;
        let book = &mut self.books[index];
        book.merge(patch);
        Ok(&*book)
    }

    /// Remove the first book matching `id`, keeping the others in order.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when no book has that id.
    pub fn remove(&mut self, id: BookId) -> Result<Book, NotFoundError> {
        let index = self.position(id).ok_or_else(|| not_found(id))?;
        // Pin the counter so the removed id is not handed out again.
        self.next_id = Some(self.peek_next_id().unwrap_or(BookId::MAX));
        Ok(self.books.remove(index))
    }
}

fn not_found(id: BookId) -> NotFoundError {
    NotFoundError {
        entity: "Book",
        id: id.to_string(),
    }
}
