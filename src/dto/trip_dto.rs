//! DTOs de viajes
//!
//! Los campos numéricos se reciben como `serde_json::Value` porque los
//! clientes envían tanto números como strings; la coerción se hace al armar
//! el `TripDraft`.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::models::trip::TripDraft;
use crate::services::derivation::{derive_trip, trip_status, TripFigures};
use crate::utils::coerce::{lenient_id, lenient_timestamp, parse_number_or_zero, parse_optional_number};

// Request para crear o reemplazar un viaje
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    pub vehicle_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub driver_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub end_time: Option<DateTime<Utc>>,
    pub start_odometer: Option<Value>,
    pub end_odometer: Option<Value>,
    pub route: Option<String>,
    pub notes: Option<String>,
    pub price: Option<Value>,
    pub fuel_cost: Option<Value>,
    pub driver_cost: Option<Value>,
    pub other_costs: Option<Value>,
    pub cargo_type: Option<String>,
    pub cargo_weight: Option<Value>,
    pub client_name: Option<String>,
}

impl TripRequest {
    pub fn figures(&self) -> TripFigures {
        TripFigures {
            start_odometer: parse_optional_number(self.start_odometer.as_ref()),
            end_odometer: parse_optional_number(self.end_odometer.as_ref()),
            price: parse_number_or_zero(self.price.as_ref()),
            fuel_cost: parse_number_or_zero(self.fuel_cost.as_ref()),
            driver_cost: parse_number_or_zero(self.driver_cost.as_ref()),
            other_costs: parse_number_or_zero(self.other_costs.as_ref()),
        }
    }

    /// Coercionar y derivar para el insert; `now` es la hora de inicio si no
    /// viene en el body
    pub fn into_draft(self, now: DateTime<Utc>) -> TripDraft {
        let mut draft = self.into_changes();
        draft.start_time = draft.start_time.or(Some(now));
        draft
    }

    /// Coercionar y derivar para el update, sin valores por defecto
    pub fn into_changes(self) -> TripDraft {
        let figures = self.figures();
        let derived = derive_trip(&figures);
        let status = trip_status(self.end_time.as_ref());

        TripDraft {
            vehicle_id: self.vehicle_id,
            driver_id: self.driver_id,
            start_time: self.start_time,
            end_time: self.end_time,
            start_odometer: figures.start_odometer,
            end_odometer: figures.end_odometer,
            distance: derived.distance,
            route: self.route,
            notes: self.notes,
            status: status.as_str().to_string(),
            price: figures.price,
            fuel_cost: figures.fuel_cost,
            driver_cost: figures.driver_cost,
            other_costs: figures.other_costs,
            total_costs: derived.total_costs,
            profit: derived.profit,
            profit_margin: derived.profit_margin,
            cargo_type: self.cargo_type,
            cargo_weight: parse_optional_number(self.cargo_weight.as_ref()),
            client_name: self.client_name,
        }
    }
}
