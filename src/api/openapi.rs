//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Books API",
        version = "0.1.0",
        description = "Book catalog JSON export and import"
    ),
    paths(
        health::health_check,
        health::readiness_check,
        books::book_json_list,
        books::book_json_detail,
        books::book_json_import,
    ),
    components(
        schemas(
            crate::models::book::SerializedBook,
            crate::models::book::BookFields,
            crate::models::book::ImportRecord,
            health::HealthResponse,
            crate::api::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog as JSON")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_book_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/"));
        assert!(doc.paths.paths.contains_key("/api/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
