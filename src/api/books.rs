//! Book export and import endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppError,
    models::book::{ImportRecord, SerializedBook},
    web::BookId,
    AppState,
};

use super::{ApiError, ApiResult, ErrorResponse};

/// List every book as exported records
#[utoipa::path(
    get,
    path = "/api/",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<SerializedBook>)
    )
)]
pub async fn book_json_list(State(state): State<AppState>) -> ApiResult<Json<Vec<SerializedBook>>> {
    Ok(Json(state.services.books.export_all().await?))
}

/// One book as a single-element array.
///
/// An unknown id answers `200 []` rather than 404, unlike the HTML detail page.
#[utoipa::path(
    get,
    path = "/api/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Zero or one book", body = Vec<SerializedBook>),
        (status = 404, description = "Id is not an integer", body = ErrorResponse)
    )
)]
pub async fn book_json_detail(
    State(state): State<AppState>,
    id: Result<BookId, AppError>,
) -> ApiResult<Json<Vec<SerializedBook>>> {
    // A non-integer id is a 404 here; an unknown integer id is `[]`
    let BookId(id) = id?;
    Ok(Json(state.services.books.export_one(id).await?))
}

/// Import exported records as new books
#[utoipa::path(
    post,
    path = "/api/",
    tag = "books",
    request_body = Vec<ImportRecord>,
    responses(
        (status = 201, description = "Books created", body = Vec<SerializedBook>),
        (status = 400, description = "Invalid record, nothing imported", body = ErrorResponse)
    )
)]
pub async fn book_json_import(
    State(state): State<AppState>,
    payload: Result<Json<Vec<ImportRecord>>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Vec<SerializedBook>>)> {
    let Json(records) =
        payload.map_err(|e| ApiError(AppError::BadRequest(e.body_text())))?;
    let created = state.services.books.import(records).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
