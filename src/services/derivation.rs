//! Motor de derivación
//!
//! Cálculos puros sobre viajes y cargas de combustible: distancia, costos
//! totales, beneficio y margen. Los valores ya llegan coercionados a `f64`
//! (ver `utils::coerce`), aquí no hay parsing ni efectos secundarios.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Estado de un viaje, persistido como texto
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Active,
    Completed,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Active => "active",
            TripStatus::Completed => "completed",
        }
    }
}

/// Cifras crudas de un viaje
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripFigures {
    pub start_odometer: Option<f64>,
    pub end_odometer: Option<f64>,
    pub price: f64,
    pub fuel_cost: f64,
    pub driver_cost: f64,
    pub other_costs: f64,
}

/// Campos derivados de un viaje
#[derive(Debug, Clone, PartialEq)]
pub struct TripFinancials {
    pub distance: Option<f64>,
    pub total_costs: f64,
    pub profit: f64,
    pub profit_margin: f64,
}

/// Derivar distancia, costos, beneficio y margen
pub fn derive_trip(figures: &TripFigures) -> TripFinancials {
    let distance = match (figures.start_odometer, figures.end_odometer) {
        (Some(start), Some(end)) => Some(end - start),
        _ => None,
    };

    let total_costs = figures.fuel_cost + figures.driver_cost + figures.other_costs;
    let profit = figures.price - total_costs;
    let profit_margin = if figures.price > 0.0 {
        profit / figures.price * 100.0
    } else {
        0.0
    };

    TripFinancials {
        distance,
        total_costs,
        profit,
        profit_margin,
    }
}

/// Un viaje con hora de fin está completado
pub fn trip_status(end_time: Option<&DateTime<Utc>>) -> TripStatus {
    match end_time {
        Some(_) => TripStatus::Completed,
        None => TripStatus::Active,
    }
}

/// Costo total de una carga de combustible
pub fn fuel_total_cost(liters: f64, price_per_liter: f64) -> f64 {
    liters * price_per_liter
}
