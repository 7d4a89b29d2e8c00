//! Controladores
//!
//! Capa entre las rutas y el store: convierte DTOs, aplica las derivaciones y
//! arma el sobre de respuesta.

pub mod assignment_controller;
pub mod driver_controller;
pub mod fuel_controller;
pub mod trip_controller;
pub mod vehicle_controller;
