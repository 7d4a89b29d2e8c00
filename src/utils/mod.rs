//! Utilidades del sistema
//!
//! Manejo de errores y coerción de valores de entrada.

pub mod coerce;
pub mod errors;
