//! Modelos del sistema
//!
//! Filas tal como se persisten en PostgreSQL, más los datos de escritura que
//! reciben los repositorios.

pub mod assignment;
pub mod driver;
pub mod fuel;
pub mod trip;
pub mod vehicle;

pub use assignment::{Assignment, AssignmentView, NewAssignment};
pub use driver::{Driver, DriverChanges, DriverSummary, NewDriver};
pub use fuel::{FuelDraft, FuelRecord, FuelRecordView};
pub use trip::{Trip, TripDraft, TripView};
pub use vehicle::{NewVehicle, Vehicle, VehicleChanges, VehicleSummary};
