//! Book service — use-cases for managing the book collection.

use tokio::sync::Mutex;

use bookshelf_domain::book::{Book, Fields};
use bookshelf_domain::error::{BookshelfError, NotFoundError};
use bookshelf_domain::id::BookId;

use crate::ports::BookRepository;

/// Application service for book CRUD operations.
///
/// Every mutation runs its load → modify → save cycle while holding
/// `write_lock`, so two concurrent writers never start from the same
/// snapshot. Reads go straight to the repository.
pub struct BookService<R> {
    repo: R,
    write_lock: Mutex<()>,
}

impl<R: BookRepository> BookService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            write_lock: Mutex::new(()),
        }
    }

    /// List all books in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_books(&self) -> Result<Vec<Book>, BookshelfError> {
        let collection = self.repo.load().await?;
        Ok(collection.into_books())
    }

    /// Look up a book by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::NotFound`] when no book with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_book(&self, id: BookId) -> Result<Book, BookshelfError> {
        let collection = self.repo.load().await?;
        collection.get(id).cloned().ok_or_else(|| {
            tracing::warn!(book_id = %id, "book lookup missed");
            NotFoundError {
                entity: "Book",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Append a new book built from `fields` and persist the collection.
    ///
    /// Any `id` in `fields` is ignored; the collection assigns one.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_book(&self, fields: Fields) -> Result<Book, BookshelfError> {
        let _guard = self.write_lock.lock().await;
        let mut collection = self.repo.load().await?;
        let created = collection.insert(fields)?.clone();
        self.repo.save(&collection).await?;
        tracing::info!(book_id = %created.id, total = collection.len(), "book created");
        Ok(created)
    }

    /// Shallow-merge `patch` over an existing book and persist the collection.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::NotFound`] if the book does not exist (in
    /// which case nothing is written), or a storage error from the repository.
    pub async fn update_book(&self, id: BookId, patch: Fields) -> Result<Book, BookshelfError> {
        let _guard = self.write_lock.lock().await;
        let mut collection = self.repo.load().await?;
        let updated = collection.merge(id, patch)?.clone();
        self.repo.save(&collection).await?;
        tracing::info!(book_id = %id, "book updated");
        Ok(updated)
    }

    /// Remove a book and persist the collection.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::NotFound`] if the book does not exist (in
    /// which case nothing is written), or a storage error from the repository.
    pub async fn delete_book(&self, id: BookId) -> Result<Book, BookshelfError> {
        let _guard = self.write_lock.lock().await;
        let mut collection = self.repo.load().await?;
        let removed = collection.remove(id)?;
        self.repo.save(&collection).await?;
        tracing::info!(book_id = %id, total = collection.len(), "book deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_domain::collection::BookCollection;
    use bookshelf_domain::error::ValidationError;
    use serde_json::{Value, json};
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex as StdMutex};

    #[derive(Default)]
    struct InMemoryBookRepo {
        store: StdMutex<BookCollection>,
        saves: AtomicUsize,
    }

    impl InMemoryBookRepo {
        fn seeded(value: Value) -> Self {
            Self {
                store: StdMutex::new(serde_json::from_value(value).unwrap()),
                saves: AtomicUsize::new(0),
            }
        }
    }

    impl BookRepository for InMemoryBookRepo {
        fn load(&self) -> impl Future<Output = Result<BookCollection, BookshelfError>> + Send {
            let snapshot = self.store.lock().unwrap().clone();
            async move {
                // Give other tasks a chance to interleave between load and save.
                tokio::task::yield_now().await;
                Ok(snapshot)
            }
        }

        fn save(
            &self,
            collection: &BookCollection,
        ) -> impl Future<Output = Result<(), BookshelfError>> + Send {
            *self.store.lock().unwrap() = collection.clone();
            self.saves.fetch_add(1, Ordering::SeqCst);
            async { Ok(()) }
        }
    }

    struct FailingRepo;

    impl BookRepository for FailingRepo {
        fn load(&self) -> impl Future<Output = Result<BookCollection, BookshelfError>> + Send {
            async { Err(BookshelfError::Storage(Box::new(std::io::Error::other("disk gone")))) }
        }

        fn save(
            &self,
            _collection: &BookCollection,
        ) -> impl Future<Output = Result<(), BookshelfError>> + Send {
            async { Err(BookshelfError::Storage(Box::new(std::io::Error::other("disk gone")))) }
        }
    }

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn make_service() -> BookService<InMemoryBookRepo> {
        BookService::new(InMemoryBookRepo::seeded(json!({
            "books": [{"id": 1, "title": "A"}, {"id": 2, "title": "B"}]
        })))
    }

    #[tokio::test]
    async fn should_list_books_in_insertion_order() {
        let svc = make_service();
        let books = svc.list_books().await.unwrap();
        assert_eq!(
            serde_json::to_value(&books).unwrap(),
            json!([{"id": 1, "title": "A"}, {"id": 2, "title": "B"}])
        );
    }

    #[tokio::test]
    async fn should_get_book_with_requested_id() {
        let svc = make_service();
        let book = svc.get_book(BookId::new(2)).await.unwrap();
        assert_eq!(book.id, BookId::new(2));
    }

    #[tokio::test]
    async fn should_return_not_found_when_book_missing() {
        let svc = make_service();
        let result = svc.get_book(BookId::new(999)).await;
        assert!(matches!(result, Err(BookshelfError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_create_book_and_grow_list_by_one() {
        let svc = make_service();
        let created = svc.create_book(fields(json!({"title": "C"}))).await.unwrap();
        assert_eq!(created.id, BookId::new(3));

        let books = svc.list_books().await.unwrap();
        assert_eq!(books.len(), 3);
        assert!(books.iter().any(|b| b.id == created.id));
    }

    #[tokio::test]
    async fn should_merge_only_supplied_fields_when_updating() {
        let svc = make_service();
        svc.create_book(fields(json!({"title": "C", "author": "Le Guin"})))
            .await
            .unwrap();

        let updated = svc
            .update_book(BookId::new(3), fields(json!({"title": "C2"})))
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&updated).unwrap(),
            json!({"id": 3, "title": "C2", "author": "Le Guin"})
        );
    }

    #[tokio::test]
    async fn should_not_save_when_updating_missing_book() {
        let svc = make_service();
        let result = svc
            .update_book(BookId::new(999), fields(json!({"title": "X"})))
            .await;

        assert!(matches!(result, Err(BookshelfError::NotFound(_))));
        assert_eq!(svc.repo.saves.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_delete_exactly_one_book() {
        let svc = make_service();
        let removed = svc.delete_book(BookId::new(1)).await.unwrap();
        assert_eq!(removed.id, BookId::new(1));

        let books = svc.list_books().await.unwrap();
        assert_eq!(
            serde_json::to_value(&books).unwrap(),
            json!([{"id": 2, "title": "B"}])
        );
    }

    #[tokio::test]
    async fn should_not_save_when_deleting_missing_book() {
        let svc = make_service();
        let result = svc.delete_book(BookId::new(999)).await;

        assert!(matches!(result, Err(BookshelfError::NotFound(_))));
        assert_eq!(svc.repo.saves.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_reject_create_when_ids_exhausted() {
        let svc = BookService::new(InMemoryBookRepo::seeded(json!({
            "books": [{"id": u64::MAX, "title": "Z"}]
        })));

        let result = svc.create_book(fields(json!({"title": "A"}))).await;

        assert!(matches!(
            result,
            Err(BookshelfError::Validation(ValidationError::IdsExhausted))
        ));
        assert_eq!(svc.repo.saves.load(Ordering::SeqCst), 0);
        assert_eq!(svc.list_books().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_propagate_storage_error() {
        let svc = BookService::new(FailingRepo);
        assert!(matches!(
            svc.list_books().await,
            Err(BookshelfError::Storage(_))
        ));
        assert!(matches!(
            svc.create_book(Fields::new()).await,
            Err(BookshelfError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn should_not_lose_updates_under_concurrent_creates() {
        let svc = Arc::new(BookService::new(InMemoryBookRepo::default()));

        let handles: Vec<_> = (0..16)
            .map(|n| {
                let svc = Arc::clone(&svc);
                tokio::spawn(async move { svc.create_book(fields(json!({"n": n}))).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let books = svc.list_books().await.unwrap();
        assert_eq!(books.len(), 16);
        let mut ids: Vec<u64> = books.iter().map(|b| b.id.get()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }
}
