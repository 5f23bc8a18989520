//! Repository layer: the book store

pub mod books;
pub mod memory;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::book::{Book, BookFields},
};

pub use books::PgBookStore;
pub use memory::MemoryBookStore;

/// Persistence for book records.
///
/// Implementations assign ids on insert and never hand out the same id twice.
/// Concurrent calls are isolated by the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books, ordered by id
    async fn list(&self) -> AppResult<Vec<Book>>;

    async fn get(&self, id: i32) -> AppResult<Option<Book>>;

    /// Insert a new book and return it with its assigned id
    async fn insert(&self, fields: &BookFields) -> AppResult<Book>;

    /// Overwrite name and pages. `None` when no such book exists.
    async fn update(&self, id: i32, fields: &BookFields) -> AppResult<Option<Book>>;

    /// Hard delete. `false` when no such book exists.
    async fn delete(&self, id: i32) -> AppResult<bool>;

    /// Cheap connectivity check for readiness probes
    async fn ping(&self) -> AppResult<()>;
}
