use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn create_health_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Fleet Management API",
        "version": API_VERSION,
    }))
}

/// Liveness probe: no consulta la base de datos
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
