use serde::Deserialize;

use crate::models::assignment::NewAssignment;
use crate::utils::coerce::lenient_id;

// Request para asignar un conductor a un vehículo
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    pub vehicle_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub driver_id: Option<i64>,
    pub notes: Option<String>,
}

impl From<CreateAssignmentRequest> for NewAssignment {
    fn from(request: CreateAssignmentRequest) -> Self {
        Self {
            vehicle_id: request.vehicle_id,
            driver_id: request.driver_id,
            notes: request.notes,
        }
    }
}
