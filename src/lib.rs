//! Books - a minimal book catalog
//!
//! Server-rendered pages to list, view, create, edit and delete books,
//! plus a JSON export/import API.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod repository;
pub mod services;
pub mod web;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::BookStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn BookStore>) -> Self {
        let services = services::Services::new(store, &config);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // The JSON API may be called from other origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let json_api = Router::new()
        .route(
            "/api/",
            get(api::books::book_json_list).post(api::books::book_json_import),
        )
        .route(
            "/api",
            get(api::books::book_json_list).post(api::books::book_json_import),
        )
        .route("/api/:id", get(api::books::book_json_detail))
        .layer(cors);

    let pages = Router::new()
        .route("/", get(web::books::book_list))
        .route("/view/:id", get(web::books::book_view))
        .route(
            "/new",
            get(web::books::book_new_form).post(web::books::book_create),
        )
        .route(
            "/edit/:id",
            get(web::books::book_edit_form).post(web::books::book_update),
        )
        .route(
            "/delete/:id",
            get(web::books::book_delete_confirm).post(web::books::book_delete),
        );

    let app = Router::new()
        .merge(pages)
        .merge(json_api)
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        .with_state(state);

    app.merge(api::openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
}
