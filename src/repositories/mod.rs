//! Repositorios
//!
//! Cada entidad tiene su trait de acceso a datos. `FleetStore` los agrupa y es
//! lo que recibe `AppState`, de modo que los handlers no conocen la
//! implementación concreta (PostgreSQL o el store en memoria de los tests).

pub mod assignment_repository;
pub mod driver_repository;
pub mod fuel_repository;
pub mod memory;
pub mod postgres;
pub mod trip_repository;
pub mod vehicle_repository;

pub use assignment_repository::AssignmentRepository;
pub use driver_repository::DriverRepository;
pub use fuel_repository::FuelRepository;
pub use memory::MemoryFleetStore;
pub use postgres::PgFleetStore;
pub use trip_repository::TripRepository;
pub use vehicle_repository::VehicleRepository;

/// Store completo de la flota
pub trait FleetStore:
    VehicleRepository + DriverRepository + AssignmentRepository + TripRepository + FuelRepository
{
}

impl<T> FleetStore for T where
    T: VehicleRepository + DriverRepository + AssignmentRepository + TripRepository + FuelRepository
{
}
