use std::sync::Arc;
use tracing::{debug, info};

use crate::dto::api_response::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::vehicle::{NewVehicle, Vehicle};
use crate::repositories::FleetStore;
use crate::utils::errors::AppError;

pub struct VehicleController {
    store: Arc<dyn FleetStore>,
}

impl VehicleController {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<Vehicle>>, AppError> {
        let vehicles = self.store.list_vehicles().await?;
        debug!("🚚 {} vehículos listados", vehicles.len());
        Ok(ApiResponse::success(vehicles))
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<ApiResponse<Vehicle>, AppError> {
        let vehicle = self.store.create_vehicle(NewVehicle::from(request)).await?;
        info!("✅ Vehículo creado: id={} reg_number={}", vehicle.id, vehicle.reg_number);
        Ok(ApiResponse::success(vehicle))
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<Vehicle>, AppError> {
        let vehicle = self.store.update_vehicle(id, request.into()).await?;
        info!("✏️ Vehículo actualizado: id={} encontrado={}", id, vehicle.is_some());
        Ok(ApiResponse::maybe(vehicle))
    }

    pub async fn delete(&self, id: i64) -> Result<ApiResponse<()>, AppError> {
        self.store.delete_vehicle(id).await?;
        info!("🗑️ Vehículo eliminado: id={}", id);
        Ok(ApiResponse::empty())
    }
}
