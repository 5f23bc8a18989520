//! Book model and its JSON export format

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Model label carried by every exported record
pub const BOOK_MODEL: &str = "book";

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Assigned by the store, never changes
    pub id: i32,
    pub name: String,
    pub pages: i32,
}

/// Editable fields of a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct BookFields {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Ensure this value has at most 200 characters and is not empty."
    ))]
    pub name: String,
    pub pages: i32,
}

impl Book {
    pub fn fields(&self) -> BookFields {
        BookFields {
            name: self.name.clone(),
            pages: self.pages,
        }
    }
}

/// Exported record: `{"model": "book", "pk": 1, "fields": {"name": ..., "pages": ...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SerializedBook {
    pub model: String,
    pub pk: i32,
    pub fields: BookFields,
}

impl From<Book> for SerializedBook {
    fn from(book: Book) -> Self {
        Self {
            model: BOOK_MODEL.to_string(),
            pk: book.id,
            fields: BookFields {
                name: book.name,
                pages: book.pages,
            },
        }
    }
}

/// Serialize books in the order given
pub fn serialize_books(books: Vec<Book>) -> Vec<SerializedBook> {
    books.into_iter().map(SerializedBook::from).collect()
}

/// Record accepted by the JSON import. `pk` is ignored, the store assigns ids.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ImportRecord {
    pub model: String,
    #[serde(default)]
    pub pk: Option<i32>,
    pub fields: BookFields,
}

impl ImportRecord {
    /// Accepts `book` as well as an app-qualified label such as `books_fbv.book`
    pub fn is_book(&self) -> bool {
        self.model == BOOK_MODEL
            || self
                .model
                .rsplit_once('.')
                .is_some_and(|(_, name)| name == BOOK_MODEL)
    }
}
