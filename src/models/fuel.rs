//! Modelo de FuelRecord

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use super::vehicle::VehicleSummary;

pub const DEFAULT_FUEL_TYPE: &str = "diesel";

/// Mapea la tabla fuel_records
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct FuelRecord {
    pub id: i64,
    pub vehicle_id: i64,
    pub fuel_date: NaiveDate,
    pub liters: f64,
    pub price_per_liter: f64,
    pub total_cost: f64,
    pub odometer: Option<f64>,
    pub fuel_type: String,
    pub station_name: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FuelRecordView {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub record: FuelRecord,
    pub vehicle: Option<Json<VehicleSummary>>,
}

/// Columnas escribibles de una carga, con `total_cost` ya calculado.
///
/// En el update los campos en `None` conservan el valor actual, salvo
/// litros, precio y `total_cost` que se reemplazan juntos.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelDraft {
    pub vehicle_id: Option<i64>,
    pub fuel_date: Option<NaiveDate>,
    pub liters: f64,
    pub price_per_liter: f64,
    pub total_cost: f64,
    pub odometer: Option<f64>,
    pub fuel_type: Option<String>,
    pub station_name: Option<String>,
    pub notes: Option<String>,
}
