//! Store en memoria
//!
//! Doble de pruebas para `FleetStore`. Reproduce el comportamiento observable
//! del schema de `sql/schema.sql`: orden de los listados, valores por defecto,
//! restricciones NOT NULL / UNIQUE / FOREIGN KEY y las reglas `ON DELETE`.
//! Los mensajes de error imitan los de PostgreSQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::assignment::{Assignment, AssignmentView, NewAssignment};
use crate::models::driver::{Driver, DriverChanges, DriverSummary, NewDriver, DEFAULT_DRIVER_STATUS};
use crate::models::fuel::{FuelDraft, FuelRecord, FuelRecordView, DEFAULT_FUEL_TYPE};
use crate::models::trip::{Trip, TripDraft, TripView};
use crate::models::vehicle::{NewVehicle, Vehicle, VehicleChanges, VehicleSummary, DEFAULT_VEHICLE_STATUS};
use crate::repositories::{
    AssignmentRepository, DriverRepository, FuelRepository, TripRepository, VehicleRepository,
};
use crate::utils::errors::{AppError, AppResult};

#[derive(Debug, Default)]
struct Tables {
    last_id: i64,
    vehicles: Vec<Vehicle>,
    drivers: Vec<Driver>,
    assignments: Vec<Assignment>,
    trips: Vec<Trip>,
    fuel_records: Vec<FuelRecord>,
}

impl Tables {
    // Una sola secuencia para todas las tablas basta para los tests
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn vehicle_summary(&self, id: Option<i64>) -> Option<Json<VehicleSummary>> {
        let id = id?;
        self.vehicles
            .iter()
            .find(|v| v.id == id)
            .map(|v| Json(VehicleSummary::from(v)))
    }

    fn driver_summary(&self, id: Option<i64>) -> Option<Json<DriverSummary>> {
        let id = id?;
        self.drivers
            .iter()
            .find(|d| d.id == id)
            .map(|d| Json(DriverSummary::from(d)))
    }

    fn vehicle_exists(&self, id: i64) -> bool {
        self.vehicles.iter().any(|v| v.id == id)
    }

    fn driver_exists(&self, id: i64) -> bool {
        self.drivers.iter().any(|d| d.id == id)
    }

    fn check_unique_reg_number(&self, reg_number: &str, except_id: Option<i64>) -> AppResult<()> {
        let taken = self
            .vehicles
            .iter()
            .any(|v| v.reg_number == reg_number && Some(v.id) != except_id);
        if taken {
            return Err(AppError::Store(format!(
                "duplicate key value violates unique constraint \"vehicles_reg_number_key\" \
                 (Key (reg_number)=({}) already exists.)",
                reg_number
            )));
        }
        Ok(())
    }

    fn check_trip_references(&self, trip: &TripDraft) -> AppResult<()> {
        if let Some(vehicle_id) = trip.vehicle_id {
            if !self.vehicle_exists(vehicle_id) {
                return Err(foreign_key_violation("trips", "vehicle_id"));
            }
        }
        if let Some(driver_id) = trip.driver_id {
            if !self.driver_exists(driver_id) {
                return Err(foreign_key_violation("trips", "driver_id"));
            }
        }
        Ok(())
    }

    fn check_fuel_vehicle(&self, vehicle_id: Option<i64>) -> AppResult<i64> {
        let vehicle_id = vehicle_id.ok_or_else(|| not_null_violation("fuel_records", "vehicle_id"))?;
        if !self.vehicle_exists(vehicle_id) {
            return Err(foreign_key_violation("fuel_records", "vehicle_id"));
        }
        Ok(vehicle_id)
    }
}

fn not_null_violation(table: &str, column: &str) -> AppError {
    AppError::Store(format!(
        "null value in column \"{}\" of relation \"{}\" violates not-null constraint",
        column, table
    ))
}

fn foreign_key_violation(table: &str, column: &str) -> AppError {
    AppError::Store(format!(
        "insert or update on table \"{}\" violates foreign key constraint \"{}_{}_fkey\"",
        table, table, column
    ))
}

fn trip_from_draft(id: i64, draft: TripDraft, now: DateTime<Utc>) -> Trip {
    Trip {
        id,
        vehicle_id: draft.vehicle_id,
        driver_id: draft.driver_id,
        start_time: draft.start_time.unwrap_or(now),
        end_time: draft.end_time,
        start_odometer: draft.start_odometer,
        end_odometer: draft.end_odometer,
        distance: draft.distance,
        route: draft.route,
        notes: draft.notes,
        status: draft.status,
        price: draft.price,
        fuel_cost: draft.fuel_cost,
        driver_cost: draft.driver_cost,
        other_costs: draft.other_costs,
        total_costs: draft.total_costs,
        profit: draft.profit,
        profit_margin: draft.profit_margin,
        cargo_type: draft.cargo_type,
        cargo_weight: draft.cargo_weight,
        client_name: draft.client_name,
        created_at: now,
        updated_at: now,
    }
}

// Mismo reparto que el UPDATE de PgFleetStore: COALESCE en lo descriptivo
fn apply_trip_changes(trip: &mut Trip, draft: TripDraft, now: DateTime<Utc>) {
    trip.vehicle_id = draft.vehicle_id.or(trip.vehicle_id);
    trip.driver_id = draft.driver_id.or(trip.driver_id);
    trip.start_time = draft.start_time.unwrap_or(trip.start_time);
    trip.route = draft.route.or(trip.route.take());
    trip.notes = draft.notes.or(trip.notes.take());
    trip.cargo_type = draft.cargo_type.or(trip.cargo_type.take());
    trip.cargo_weight = draft.cargo_weight.or(trip.cargo_weight);
    trip.client_name = draft.client_name.or(trip.client_name.take());

    trip.end_time = draft.end_time;
    trip.start_odometer = draft.start_odometer;
    trip.end_odometer = draft.end_odometer;
    trip.distance = draft.distance;
    trip.status = draft.status;
    trip.price = draft.price;
    trip.fuel_cost = draft.fuel_cost;
    trip.driver_cost = draft.driver_cost;
    trip.other_costs = draft.other_costs;
    trip.total_costs = draft.total_costs;
    trip.profit = draft.profit;
    trip.profit_margin = draft.profit_margin;
    trip.updated_at = now;
}

fn fuel_from_draft(id: i64, vehicle_id: i64, draft: FuelDraft, now: DateTime<Utc>) -> FuelRecord {
    FuelRecord {
        id,
        vehicle_id,
        fuel_date: draft.fuel_date.unwrap_or_else(|| now.date_naive()),
        liters: draft.liters,
        price_per_liter: draft.price_per_liter,
        total_cost: draft.total_cost,
        odometer: draft.odometer,
        fuel_type: draft
            .fuel_type
            .unwrap_or_else(|| DEFAULT_FUEL_TYPE.to_string()),
        station_name: draft.station_name,
        notes: draft.notes,
        created_at: now,
        updated_at: now,
    }
}

fn apply_fuel_changes(record: &mut FuelRecord, draft: FuelDraft, now: DateTime<Utc>) {
    record.vehicle_id = draft.vehicle_id.unwrap_or(record.vehicle_id);
    record.fuel_date = draft.fuel_date.unwrap_or(record.fuel_date);
    record.odometer = draft.odometer.or(record.odometer);
    if let Some(fuel_type) = draft.fuel_type {
        record.fuel_type = fuel_type;
    }
    record.station_name = draft.station_name.or(record.station_name.take());
    record.notes = draft.notes.or(record.notes.take());

    record.liters = draft.liters;
    record.price_per_liter = draft.price_per_liter;
    record.total_cost = draft.total_cost;
    record.updated_at = now;
}

/// Store en memoria, clonable y compartible entre requests
#[derive(Debug, Clone, Default)]
pub struct MemoryFleetStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryFleetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VehicleRepository for MemoryFleetStore {
    async fn list_vehicles(&self) -> AppResult<Vec<Vehicle>> {
        let tables = self.tables.read().await;
        let mut vehicles = tables.vehicles.clone();
        vehicles.sort_by_key(|v| v.id);
        Ok(vehicles)
    }

    async fn create_vehicle(&self, vehicle: NewVehicle) -> AppResult<Vehicle> {
        let mut tables = self.tables.write().await;
        let reg_number = vehicle
            .reg_number
            .ok_or_else(|| not_null_violation("vehicles", "reg_number"))?;
        tables.check_unique_reg_number(&reg_number, None)?;

        let now = Utc::now();
        let vehicle = Vehicle {
            id: tables.next_id(),
            reg_number,
            brand: vehicle.brand,
            vehicle_type: vehicle.vehicle_type,
            status: DEFAULT_VEHICLE_STATUS.to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.vehicles.push(vehicle.clone());
        Ok(vehicle)
    }

    async fn update_vehicle(&self, id: i64, changes: VehicleChanges) -> AppResult<Option<Vehicle>> {
        let mut tables = self.tables.write().await;
        if let Some(reg_number) = &changes.reg_number {
            tables.check_unique_reg_number(reg_number, Some(id))?;
        }

        let Some(vehicle) = tables.vehicles.iter_mut().find(|v| v.id == id) else {
            return Ok(None);
        };
        if let Some(reg_number) = changes.reg_number {
            vehicle.reg_number = reg_number;
        }
        if let Some(brand) = changes.brand {
            vehicle.brand = Some(brand);
        }
        if let Some(vehicle_type) = changes.vehicle_type {
            vehicle.vehicle_type = vehicle_type;
        }
        if let Some(status) = changes.status {
            vehicle.status = status;
        }
        vehicle.updated_at = Utc::now();
        Ok(Some(vehicle.clone()))
    }

    async fn delete_vehicle(&self, id: i64) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        tables.vehicles.retain(|v| v.id != id);
        // ON DELETE CASCADE / SET NULL
        tables.assignments.retain(|a| a.vehicle_id != id);
        tables.fuel_records.retain(|f| f.vehicle_id != id);
        for trip in tables.trips.iter_mut().filter(|t| t.vehicle_id == Some(id)) {
            trip.vehicle_id = None;
        }
        Ok(())
    }
}

#[async_trait]
impl DriverRepository for MemoryFleetStore {
    async fn list_drivers(&self) -> AppResult<Vec<Driver>> {
        let tables = self.tables.read().await;
        let mut drivers = tables.drivers.clone();
        drivers.sort_by_key(|d| d.id);
        Ok(drivers)
    }

    async fn create_driver(&self, driver: NewDriver) -> AppResult<Driver> {
        let mut tables = self.tables.write().await;
        let name = driver.name.ok_or_else(|| not_null_violation("drivers", "name"))?;

        let now = Utc::now();
        let driver = Driver {
            id: tables.next_id(),
            name,
            phone: driver.phone,
            license_number: driver.license_number,
            license_category: driver.license_category,
            hire_date: driver.hire_date,
            status: DEFAULT_DRIVER_STATUS.to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.drivers.push(driver.clone());
        Ok(driver)
    }

    async fn update_driver(&self, id: i64, changes: DriverChanges) -> AppResult<Option<Driver>> {
        let mut tables = self.tables.write().await;
        let Some(driver) = tables.drivers.iter_mut().find(|d| d.id == id) else {
            return Ok(None);
        };
        if let Some(name) = changes.name {
            driver.name = name;
        }
        if let Some(phone) = changes.phone {
            driver.phone = Some(phone);
        }
        if let Some(license_number) = changes.license_number {
            driver.license_number = Some(license_number);
        }
        if let Some(license_category) = changes.license_category {
            driver.license_category = Some(license_category);
        }
        if let Some(status) = changes.status {
            driver.status = status;
        }
        driver.updated_at = Utc::now();
        Ok(Some(driver.clone()))
    }

    async fn delete_driver(&self, id: i64) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        tables.drivers.retain(|d| d.id != id);
        tables.assignments.retain(|a| a.driver_id != id);
        for trip in tables.trips.iter_mut().filter(|t| t.driver_id == Some(id)) {
            trip.driver_id = None;
        }
        Ok(())
    }
}

#[async_trait]
impl AssignmentRepository for MemoryFleetStore {
    async fn list_active_assignments(&self) -> AppResult<Vec<AssignmentView>> {
        let tables = self.tables.read().await;
        let mut active: Vec<&Assignment> = tables.assignments.iter().filter(|a| a.is_active()).collect();
        active.sort_by(|a, b| b.assigned_at.cmp(&a.assigned_at).then(b.id.cmp(&a.id)));

        Ok(active
            .into_iter()
            .map(|a| AssignmentView {
                assignment: a.clone(),
                vehicle: tables.vehicle_summary(Some(a.vehicle_id)),
                driver: tables.driver_summary(Some(a.driver_id)),
            })
            .collect())
    }

    async fn create_assignment(&self, assignment: NewAssignment) -> AppResult<Assignment> {
        let mut tables = self.tables.write().await;
        let vehicle_id = assignment
            .vehicle_id
            .ok_or_else(|| not_null_violation("vehicle_assignments", "vehicle_id"))?;
        let driver_id = assignment
            .driver_id
            .ok_or_else(|| not_null_violation("vehicle_assignments", "driver_id"))?;
        if !tables.vehicle_exists(vehicle_id) {
            return Err(foreign_key_violation("vehicle_assignments", "vehicle_id"));
        }
        if !tables.driver_exists(driver_id) {
            return Err(foreign_key_violation("vehicle_assignments", "driver_id"));
        }

        let now = Utc::now();
        let assignment = Assignment {
            id: tables.next_id(),
            vehicle_id,
            driver_id,
            assigned_at: now,
            ended_at: None,
            notes: assignment.notes,
            created_at: now,
        };
        tables.assignments.push(assignment.clone());
        Ok(assignment)
    }

    async fn end_assignment(&self, id: i64, ended_at: DateTime<Utc>) -> AppResult<Option<Assignment>> {
        let mut tables = self.tables.write().await;
        Ok(tables.assignments.iter_mut().find(|a| a.id == id).map(|a| {
            a.ended_at = Some(ended_at);
            a.clone()
        }))
    }
}

#[async_trait]
impl TripRepository for MemoryFleetStore {
    async fn list_trips(&self) -> AppResult<Vec<TripView>> {
        let tables = self.tables.read().await;
        let mut trips: Vec<&Trip> = tables.trips.iter().collect();
        trips.sort_by(|a, b| b.start_time.cmp(&a.start_time).then(b.id.cmp(&a.id)));

        Ok(trips
            .into_iter()
            .map(|t| TripView {
                trip: t.clone(),
                vehicle: tables.vehicle_summary(t.vehicle_id),
                driver: tables.driver_summary(t.driver_id),
            })
            .collect())
    }

    async fn create_trip(&self, trip: TripDraft) -> AppResult<Trip> {
        let mut tables = self.tables.write().await;
        tables.check_trip_references(&trip)?;

        let id = tables.next_id();
        let trip = trip_from_draft(id, trip, Utc::now());
        tables.trips.push(trip.clone());
        Ok(trip)
    }

    async fn update_trip(&self, id: i64, trip: TripDraft) -> AppResult<Option<Trip>> {
        let mut tables = self.tables.write().await;
        tables.check_trip_references(&trip)?;

        let Some(current) = tables.trips.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        apply_trip_changes(current, trip, Utc::now());
        Ok(Some(current.clone()))
    }

    async fn delete_trip(&self, id: i64) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        tables.trips.retain(|t| t.id != id);
        Ok(())
    }
}

#[async_trait]
impl FuelRepository for MemoryFleetStore {
    async fn list_fuel_records(&self) -> AppResult<Vec<FuelRecordView>> {
        let tables = self.tables.read().await;
        let mut records: Vec<&FuelRecord> = tables.fuel_records.iter().collect();
        records.sort_by(|a, b| b.fuel_date.cmp(&a.fuel_date).then(b.id.cmp(&a.id)));

        Ok(records
            .into_iter()
            .map(|f| FuelRecordView {
                record: f.clone(),
                vehicle: tables.vehicle_summary(Some(f.vehicle_id)),
            })
            .collect())
    }

    async fn create_fuel_record(&self, record: FuelDraft) -> AppResult<FuelRecord> {
        let mut tables = self.tables.write().await;
        let vehicle_id = tables.check_fuel_vehicle(record.vehicle_id)?;

        let id = tables.next_id();
        let record = fuel_from_draft(id, vehicle_id, record, Utc::now());
        tables.fuel_records.push(record.clone());
        Ok(record)
    }

    async fn update_fuel_record(&self, id: i64, record: FuelDraft) -> AppResult<Option<FuelRecord>> {
        let mut tables = self.tables.write().await;
        if let Some(vehicle_id) = record.vehicle_id {
            if !tables.vehicle_exists(vehicle_id) {
                return Err(foreign_key_violation("fuel_records", "vehicle_id"));
            }
        }

        let Some(current) = tables.fuel_records.iter_mut().find(|f| f.id == id) else {
            return Ok(None);
        };
        apply_fuel_changes(current, record, Utc::now());
        Ok(Some(current.clone()))
    }

    async fn delete_fuel_record(&self, id: i64) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        tables.fuel_records.retain(|f| f.id != id);
        Ok(())
    }
}
