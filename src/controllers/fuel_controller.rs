use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

use crate::dto::api_response::ApiResponse;
use crate::dto::fuel_dto::FuelRecordRequest;
use crate::models::fuel::{FuelRecord, FuelRecordView};
use crate::repositories::FleetStore;
use crate::utils::errors::AppError;

pub struct FuelController {
    store: Arc<dyn FleetStore>,
}

impl FuelController {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<FuelRecordView>>, AppError> {
        let records = self.store.list_fuel_records().await?;
        debug!("⛽ {} cargas de combustible listadas", records.len());
        Ok(ApiResponse::success(records))
    }

    pub async fn create(&self, request: FuelRecordRequest) -> Result<ApiResponse<FuelRecord>, AppError> {
        let record = self.store.create_fuel_record(request.into_draft(Utc::now())).await?;
        info!(
            "✅ Carga registrada: id={} vehicle_id={} total_cost={:.2}",
            record.id, record.vehicle_id, record.total_cost
        );
        Ok(ApiResponse::success(record))
    }

    pub async fn update(
        &self,
        id: i64,
        request: FuelRecordRequest,
    ) -> Result<ApiResponse<FuelRecord>, AppError> {
        let record = self.store.update_fuel_record(id, request.into_changes()).await?;
        info!("✏️ Carga actualizada: id={} encontrada={}", id, record.is_some());
        Ok(ApiResponse::maybe(record))
    }

    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>, AppError> {
        self.store.delete_fuel_record(id).await?;
        info!("🗑️ Carga eliminada: id={}", id);
        Ok(ApiResponse::empty())
    }
}
