use std::sync::Arc;

use crate::config::ApiConfig;

/// Shared application state, injected into route handlers via Axum state.
/// Configuration only; page data never lives on the server.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
