//! DTOs de la API
//!
//! Bodies de entrada en camelCase y el sobre común de respuesta.

pub mod api_response;
pub mod assignment_dto;
pub mod driver_dto;
pub mod fuel_dto;
pub mod trip_dto;
pub mod vehicle_dto;

pub use api_response::ApiResponse;
