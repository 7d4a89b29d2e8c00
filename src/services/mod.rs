//! Servicios del sistema
//!
//! Lógica de negocio independiente del transporte y del store.

pub mod derivation;

pub use derivation::{derive_trip, fuel_total_cost, trip_status, TripFigures, TripFinancials, TripStatus};
