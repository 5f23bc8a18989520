//! Book catalog service

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    forms::{BookForm, FormErrors},
    models::book::{serialize_books, Book, BookFields, ImportRecord, SerializedBook},
    repository::BookStore,
};

/// Result of a form submission that reached the store
#[derive(Debug)]
pub enum FormOutcome {
    Saved(Book),
    Invalid(FormErrors),
}

#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
    log_submissions: bool,
}

impl BookService {
    pub fn new(store: Arc<dyn BookStore>, log_submissions: bool) -> Self {
        Self {
            store,
            log_submissions,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.store.list().await
    }

    pub async fn get(&self, id: i32) -> AppResult<Book> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Validate a create submission and insert it
    pub async fn create(&self, form: &BookForm) -> AppResult<FormOutcome> {
        if self.log_submissions {
            let snapshot = serde_json::to_string(&self.export_all().await?)
                .map_err(|e| AppError::Internal(e.to_string()))?;
            tracing::debug!(submitted = ?form, catalog = %snapshot, "Book create submission");
        }

        let fields = match form.clean() {
            Ok(fields) => fields,
            Err(errors) => return Ok(FormOutcome::Invalid(errors)),
        };

        let book = self.store.insert(&fields).await?;
        tracing::info!("Created book id={} name={:?}", book.id, book.name);
        Ok(FormOutcome::Saved(book))
    }

    /// Validate an edit submission and overwrite the book in place
    pub async fn update(&self, id: i32, form: &BookForm) -> AppResult<FormOutcome> {
        // An unknown id is NotFound even when the submission is also invalid
        self.get(id).await?;

        let fields = match form.clean() {
            Ok(fields) => fields,
            Err(errors) => return Ok(FormOutcome::Invalid(errors)),
        };

        let book = self
            .store
            .update(id, &fields)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!("Updated book id={}", book.id);
        Ok(FormOutcome::Saved(book))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!("Deleted book id={}", id);
        Ok(())
    }

    pub async fn export_all(&self) -> AppResult<Vec<SerializedBook>> {
        Ok(serialize_books(self.store.list().await?))
    }

    /// Zero or one record. A missing id yields an empty list, not an error.
    pub async fn export_one(&self, id: i32) -> AppResult<Vec<SerializedBook>> {
        Ok(serialize_books(self.store.get(id).await?.into_iter().collect()))
    }

    /// Insert exported records as new books. Every record is checked before
    /// any insert; supplied `pk` values are ignored.
    pub async fn import(&self, records: Vec<ImportRecord>) -> AppResult<Vec<SerializedBook>> {
        let mut batch: Vec<BookFields> = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            if !record.is_book() {
                return Err(AppError::Validation(format!(
                    "Record {}: unsupported model {:?}",
                    index, record.model
                )));
            }
            let fields = BookFields {
                name: record.fields.name.trim().to_string(),
                pages: record.fields.pages,
            };
            fields
                .validate()
                .map_err(|e| AppError::Validation(format!("Record {}: {}", index, e)))?;
            batch.push(fields);
        }

        let mut created = Vec::with_capacity(batch.len());
        for fields in &batch {
            created.push(self.store.insert(fields).await?);
        }
        tracing::info!("Imported {} book(s)", created.len());
        Ok(serialize_books(created))
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Book {} not found", id))
}
