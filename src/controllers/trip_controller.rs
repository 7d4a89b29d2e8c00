use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

use crate::dto::api_response::ApiResponse;
use crate::dto::trip_dto::TripRequest;
use crate::models::trip::{Trip, TripView};
use crate::repositories::FleetStore;
use crate::utils::errors::AppError;

pub struct TripController {
    store: Arc<dyn FleetStore>,
}

impl TripController {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<TripView>>, AppError> {
        let trips = self.store.list_trips().await?;
        debug!("🛣️ {} viajes listados", trips.len());
        Ok(ApiResponse::success(trips))
    }

    pub async fn create(&self, request: TripRequest) -> Result<ApiResponse<Trip>, AppError> {
        let draft = request.into_draft(Utc::now());
        let trip = self.store.create_trip(draft).await?;
        info!(
            "✅ Viaje creado: id={} status={} profit={:.2} margin={:.2}%",
            trip.id, trip.status, trip.profit, trip.profit_margin
        );
        Ok(ApiResponse::success(trip))
    }

    pub async fn update(&self, id: i64, request: TripRequest) -> Result<ApiResponse<Trip>, AppError> {
        let draft = request.into_changes();
        let trip = self.store.update_trip(id, draft).await?;
        info!("✏️ Viaje actualizado: id={} encontrado={}", id, trip.is_some());
        Ok(ApiResponse::maybe(trip))
    }

    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>, AppError> {
        self.store.delete_trip(id).await?;
        info!("🗑️ Viaje eliminado: id={}", id);
        Ok(ApiResponse::empty())
    }
}
