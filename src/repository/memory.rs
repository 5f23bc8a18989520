//! In-process book store, for tests and throwaway instances

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::BookStore;
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFields},
};

#[derive(Default)]
struct Inner {
    last_id: i32,
    books: BTreeMap<i32, Book>,
}

#[derive(Default)]
pub struct MemoryBookStore {
    inner: RwLock<Inner>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn with_last_id(last_id: i32) -> Self {
        Self {
            inner: RwLock::new(Inner {
                last_id,
                books: BTreeMap::new(),
            }),
        }
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.inner.read().await.books.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> AppResult<Option<Book>> {
        Ok(self.inner.read().await.books.get(&id).cloned())
    }

    async fn insert(&self, fields: &BookFields) -> AppResult<Book> {
        let mut inner = self.inner.write().await;
        // ids are never reused, even after deletes
        let id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("Book id space exhausted".to_string()))?;
        inner.last_id = id;
        let book = Book {
            id,
            name: fields.name.clone(),
            pages: fields.pages,
        };
        inner.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn update(&self, id: i32, fields: &BookFields) -> AppResult<Option<Book>> {
        let mut inner = self.inner.write().await;
        Ok(inner.books.get_mut(&id).map(|book| {
            book.name = fields.name.clone();
            book.pages = fields.pages;
            book.clone()
        }))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        Ok(self.inner.write().await.books.remove(&id).is_some())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, pages: i32) -> BookFields {
        BookFields {
            name: name.to_string(),
            pages,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_fresh_ids() {
        let store = MemoryBookStore::new();
        let a = store.insert(&fields("A", 1)).await.unwrap();
        let b = store.insert(&fields("B", 2)).await.unwrap();
        assert_ne!(a.id, b.id);

        assert!(store.delete(b.id).await.unwrap());
        let c = store.insert(&fields("C", 3)).await.unwrap();
        assert!(c.id > b.id);
    }

    #[tokio::test]
    async fn test_insert_fails_when_ids_run_out() {
        let store = MemoryBookStore::with_last_id(i32::MAX - 1);
        let last = store.insert(&fields("Last", 1)).await.unwrap();
        assert_eq!(last.id, i32::MAX);

        let err = store.insert(&fields("One too many", 1)).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_in_id_order() {
        let store = MemoryBookStore::new();
        for name in ["Z", "M", "A"] {
            store.insert(&fields(name, 10)).await.unwrap();
        }
        let names: Vec<_> = store.list().await.unwrap().into_iter().map(|b| b.name).collect();
        assert_eq!(names, ["Z", "M", "A"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing() {
        let store = MemoryBookStore::new();
        assert!(store.update(42, &fields("X", 1)).await.unwrap().is_none());
        assert!(!store.delete(42).await.unwrap());

        let book = store.insert(&fields("Old", 1)).await.unwrap();
        let updated = store.update(book.id, &fields("New", 2)).await.unwrap().unwrap();
        assert_eq!(updated, Book { id: book.id, name: "New".to_string(), pages: 2 });
        assert_eq!(store.get(book.id).await.unwrap(), Some(updated));
    }
}
