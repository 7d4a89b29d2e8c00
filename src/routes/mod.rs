//! Rutas HTTP
//!
//! Un router por entidad, anidados bajo `/api`.

pub mod assignment_routes;
pub mod driver_routes;
pub mod fuel_routes;
pub mod health_routes;
pub mod trip_routes;
pub mod vehicle_routes;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer;
use crate::state::AppState;

/// Armar la aplicación completa con sus capas
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .merge(health_routes::create_health_router())
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/drivers", driver_routes::create_driver_router())
        .nest("/api/assignments", assignment_routes::create_assignment_router())
        .nest("/api/trips", trip_routes::create_trip_router())
        .nest("/api/fuel", fuel_routes::create_fuel_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
