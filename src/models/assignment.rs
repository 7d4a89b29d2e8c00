//! Modelo de Assignment
//!
//! Una asignación está activa mientras `ended_at` sea NULL. No se garantiza
//! una sola asignación activa por vehículo o conductor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use super::driver::DriverSummary;
use super::vehicle::VehicleSummary;

/// Mapea la tabla vehicle_assignments
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Assignment {
    pub id: i64,
    pub vehicle_id: i64,
    pub driver_id: i64,
    pub assigned_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Assignment {
    pub fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }
}

/// Asignación con los resúmenes de vehículo y conductor embebidos
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AssignmentView {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub assignment: Assignment,
    pub vehicle: Option<Json<VehicleSummary>>,
    pub driver: Option<Json<DriverSummary>>,
}

#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub vehicle_id: Option<i64>,
    pub driver_id: Option<i64>,
    pub notes: Option<String>,
}
