use serde::Deserialize;

use crate::models::vehicle::{NewVehicle, VehicleChanges, DEFAULT_VEHICLE_TYPE};
use crate::utils::coerce::non_empty_or;

// Request para crear un vehículo
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    pub reg_number: Option<String>,
    pub brand: Option<String>,
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
}

// Request para actualizar un vehículo
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    pub reg_number: Option<String>,
    pub brand: Option<String>,
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
    pub status: Option<String>,
}

impl From<CreateVehicleRequest> for NewVehicle {
    fn from(request: CreateVehicleRequest) -> Self {
        Self {
            reg_number: request.reg_number,
            brand: request.brand,
            vehicle_type: non_empty_or(request.vehicle_type, DEFAULT_VEHICLE_TYPE),
        }
    }
}

impl From<UpdateVehicleRequest> for VehicleChanges {
    fn from(request: UpdateVehicleRequest) -> Self {
        Self {
            reg_number: request.reg_number,
            brand: request.brand,
            vehicle_type: request.vehicle_type.filter(|v| !v.trim().is_empty()),
            status: request.status,
        }
    }
}
