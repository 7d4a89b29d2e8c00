//! Modelo de Vehicle
//!
//! Mapea la tabla `vehicles`. Las columnas se serializan tal cual (snake_case).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_VEHICLE_TYPE: &str = "truck";
pub const DEFAULT_VEHICLE_STATUS: &str = "active";

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Vehicle {
    pub id: i64,
    pub reg_number: String,
    pub brand: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Resumen embebido en los listados de asignaciones, viajes y combustible
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleSummary {
    pub id: i64,
    pub reg_number: String,
    pub brand: Option<String>,
}

impl From<&Vehicle> for VehicleSummary {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id,
            reg_number: vehicle.reg_number.clone(),
            brand: vehicle.brand.clone(),
        }
    }
}

/// Datos para insertar un vehículo (el estado inicial siempre es `active`)
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub reg_number: Option<String>,
    pub brand: Option<String>,
    pub vehicle_type: String,
}

/// Cambios parciales: `None` conserva el valor actual
#[derive(Debug, Clone, Default)]
pub struct VehicleChanges {
    pub reg_number: Option<String>,
    pub brand: Option<String>,
    pub vehicle_type: Option<String>,
    pub status: Option<String>,
}
