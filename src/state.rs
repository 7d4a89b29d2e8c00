//! Shared application state
//!
//! Estado compartido que se pasa a través del router de Axum. El store se
//! inyecta como trait object para poder sustituirlo en los tests.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::FleetStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FleetStore>,
    pub config: Arc<EnvironmentConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn FleetStore>, config: EnvironmentConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
