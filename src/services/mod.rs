//! Business logic services

pub mod books;

use std::sync::Arc;

use crate::{config::AppConfig, repository::BookStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BookService,
}

impl Services {
    /// Create all services on top of the given store
    pub fn new(store: Arc<dyn BookStore>, config: &AppConfig) -> Self {
        Self {
            books: books::BookService::new(store, config.logging.log_submissions),
        }
    }
}
