//! Modelo de Trip
//!
//! `distance`, `total_costs`, `profit`, `profit_margin` y `status` se derivan
//! antes de persistir (ver `services::derivation`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use super::driver::DriverSummary;
use super::vehicle::VehicleSummary;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Trip {
    pub id: i64,
    pub vehicle_id: Option<i64>,
    pub driver_id: Option<i64>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub start_odometer: Option<f64>,
    pub end_odometer: Option<f64>,
    pub distance: Option<f64>,
    pub route: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub price: f64,
    pub fuel_cost: f64,
    pub driver_cost: f64,
    pub other_costs: f64,
    pub total_costs: f64,
    pub profit: f64,
    pub profit_margin: f64,
    pub cargo_type: Option<String>,
    pub cargo_weight: Option<f64>,
    pub client_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TripView {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub trip: Trip,
    pub vehicle: Option<Json<VehicleSummary>>,
    pub driver: Option<Json<DriverSummary>>,
}

/// Columnas escribibles de un viaje, ya derivadas.
///
/// En el update los campos descriptivos en `None` conservan el valor actual;
/// odómetros, montos, `end_time` y sus derivados se reemplazan siempre juntos.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDraft {
    pub vehicle_id: Option<i64>,
    pub driver_id: Option<i64>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub start_odometer: Option<f64>,
    pub end_odometer: Option<f64>,
    pub distance: Option<f64>,
    pub route: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub price: f64,
    pub fuel_cost: f64,
    pub driver_cost: f64,
    pub other_costs: f64,
    pub total_costs: f64,
    pub profit: f64,
    pub profit_margin: f64,
    pub cargo_type: Option<String>,
    pub cargo_weight: Option<f64>,
    pub client_name: Option<String>,
}
