//! Shared application state for all routes.

use crate::store::PlantStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Constructed once at startup and injected into every handler.
    pub store: Arc<dyn PlantStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PlantStore>) -> Self {
        AppState { store }
    }
}
