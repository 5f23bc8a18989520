//! Server-rendered HTML pages for the catalog

pub mod books;
pub mod templates;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::AppError;

/// Book id from the `:id` path segment. A segment that is not an `i32`
/// is NotFound, like an id with no book behind it.
pub struct BookId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::NotFound(e.body_text()))?;

        raw.parse::<i32>()
            .map(BookId)
            .map_err(|_| AppError::NotFound(format!("Book {} not found", raw)))
    }
}
