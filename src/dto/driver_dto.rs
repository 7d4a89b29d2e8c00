use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::driver::{DriverChanges, NewDriver};
use crate::utils::coerce::lenient_date;

// Request para crear un conductor
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriverRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub license_number: Option<String>,
    pub license_category: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub hire_date: Option<NaiveDate>,
}

// Request para actualizar un conductor
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub license_number: Option<String>,
    pub license_category: Option<String>,
    pub status: Option<String>,
}

impl From<CreateDriverRequest> for NewDriver {
    fn from(request: CreateDriverRequest) -> Self {
        Self {
            name: request.name,
            phone: request.phone,
            license_number: request.license_number,
            license_category: request.license_category,
            hire_date: request.hire_date,
        }
    }
}

impl From<UpdateDriverRequest> for DriverChanges {
    fn from(request: UpdateDriverRequest) -> Self {
        Self {
            name: request.name,
            phone: request.phone,
            license_number: request.license_number,
            license_category: request.license_category,
            status: request.status,
        }
    }
}
