use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::models::fuel::{FuelDraft, DEFAULT_FUEL_TYPE};
use crate::services::derivation::fuel_total_cost;
use crate::utils::coerce::{lenient_date, lenient_id, non_empty_or, parse_number_or_zero, parse_optional_number};

// Request para crear o reemplazar una carga de combustible
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelRecordRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    pub vehicle_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub fuel_date: Option<NaiveDate>,
    pub liters: Option<Value>,
    pub price_per_liter: Option<Value>,
    pub odometer: Option<Value>,
    pub fuel_type: Option<String>,
    pub station_name: Option<String>,
    pub notes: Option<String>,
}

impl FuelRecordRequest {
    /// Insert: fecha de hoy y `diesel` si no vienen en el body
    pub fn into_draft(self, now: DateTime<Utc>) -> FuelDraft {
        let mut draft = self.into_changes();
        draft.fuel_date = draft.fuel_date.or(Some(now.date_naive()));
        draft.fuel_type = Some(non_empty_or(draft.fuel_type, DEFAULT_FUEL_TYPE));
        draft
    }

    /// Update: sólo litros y precio se reemplazan siempre, ausentes cuentan
    /// como `0` igual que en los viajes
    pub fn into_changes(self) -> FuelDraft {
        let liters = parse_number_or_zero(self.liters.as_ref());
        let price_per_liter = parse_number_or_zero(self.price_per_liter.as_ref());

        FuelDraft {
            vehicle_id: self.vehicle_id,
            fuel_date: self.fuel_date,
            liters,
            price_per_liter,
            total_cost: fuel_total_cost(liters, price_per_liter),
            odometer: parse_optional_number(self.odometer.as_ref()),
            fuel_type: self.fuel_type.filter(|v| !v.trim().is_empty()),
            station_name: self.station_name,
            notes: self.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fuel_draft_total_cost() {
        let request: FuelRecordRequest = serde_json::from_value(json!({
            "vehicleId": 1,
            "fuelDate": "2024-06-10",
            "liters": 40,
            "pricePerLiter": "1.5"
        }))
        .unwrap();

        let draft = request.into_draft(Utc::now());
        assert_eq!(draft.total_cost, 60.0);
        assert_eq!(draft.fuel_type.as_deref(), Some("diesel"));
        assert_eq!(draft.fuel_date, NaiveDate::from_ymd_opt(2024, 6, 10));
    }

    #[test]
    fn test_fuel_draft_missing_values_are_zero() {
        let now = Utc::now();
        let draft = FuelRecordRequest::default().into_draft(now);

        assert_eq!(draft.liters, 0.0);
        assert_eq!(draft.price_per_liter, 0.0);
        assert_eq!(draft.total_cost, 0.0);
        assert_eq!(draft.fuel_date, Some(now.date_naive()));
        assert_eq!(draft.odometer, None);
    }

    #[test]
    fn test_fuel_changes_keep_unsent_fields_unset() {
        let request: FuelRecordRequest =
            serde_json::from_value(json!({ "liters": 50, "pricePerLiter": 2, "fuelType": "" })).unwrap();
        let changes = request.into_changes();

        assert_eq!(changes.vehicle_id, None);
        assert_eq!(changes.fuel_date, None);
        assert_eq!(changes.fuel_type, None);
        assert_eq!(changes.total_cost, 100.0);
    }
}
