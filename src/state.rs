//! Shared application state for all routes.

use crate::source::DataSource;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn DataSource>,
}

impl AppState {
    pub fn new(source: impl DataSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}
