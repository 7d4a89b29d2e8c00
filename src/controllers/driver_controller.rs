use std::sync::Arc;
use tracing::{debug, info};

use crate::dto::api_response::ApiResponse;
use crate::dto::driver_dto::{CreateDriverRequest, UpdateDriverRequest};
use crate::models::driver::{Driver, NewDriver};
use crate::repositories::FleetStore;
use crate::utils::errors::AppError;

pub struct DriverController {
    store: Arc<dyn FleetStore>,
}

impl DriverController {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<Driver>>, AppError> {
        let drivers = self.store.list_drivers().await?;
        debug!("👤 {} conductores listados", drivers.len());
        Ok(ApiResponse::success(drivers))
    }

    pub async fn create(&self, request: CreateDriverRequest) -> Result<ApiResponse<Driver>, AppError> {
        let driver = self.store.create_driver(NewDriver::from(request)).await?;
        info!("✅ Conductor creado: id={} name={}", driver.id, driver.name);
        Ok(ApiResponse::success(driver))
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateDriverRequest,
    ) -> Result<ApiResponse<Driver>, AppError> {
        let driver = self.store.update_driver(id, request.into()).await?;
        info!("✏️ Conductor actualizado: id={} encontrado={}", id, driver.is_some());
        Ok(ApiResponse::maybe(driver))
    }

    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>, AppError> {
        self.store.delete_driver(id).await?;
        info!("🗑️ Conductor eliminado: id={}", id);
        Ok(ApiResponse::empty())
    }
}
