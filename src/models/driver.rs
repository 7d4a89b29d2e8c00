//! Modelo de Driver

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_DRIVER_STATUS: &str = "active";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Driver {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub license_number: Option<String>,
    pub license_category: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriverSummary {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
}

impl From<&Driver> for DriverSummary {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id,
            name: driver.name.clone(),
            phone: driver.phone.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewDriver {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub license_number: Option<String>,
    pub license_category: Option<String>,
    pub hire_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct DriverChanges {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub license_number: Option<String>,
    pub license_category: Option<String>,
    pub status: Option<String>,
}
