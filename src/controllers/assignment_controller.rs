use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

use crate::dto::api_response::ApiResponse;
use crate::dto::assignment_dto::CreateAssignmentRequest;
use crate::models::assignment::{Assignment, AssignmentView};
use crate::repositories::FleetStore;
use crate::utils::errors::AppError;

pub struct AssignmentController {
    store: Arc<dyn FleetStore>,
}

impl AssignmentController {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    pub async fn list_active(&self) -> Result<ApiResponse<Vec<AssignmentView>>, AppError> {
        let assignments = self.store.list_active_assignments().await?;
        debug!("🔗 {} asignaciones activas", assignments.len());
        Ok(ApiResponse::success(assignments))
    }

    pub async fn create(
        &self,
        request: CreateAssignmentRequest,
    ) -> Result<ApiResponse<Assignment>, AppError> {
        let assignment = self.store.create_assignment(request.into()).await?;
        info!(
            "✅ Asignación creada: id={} vehicle_id={} driver_id={}",
            assignment.id, assignment.vehicle_id, assignment.driver_id
        );
        Ok(ApiResponse::success(assignment))
    }

    /// Cerrar la asignación con la hora actual
    pub async fn end(&self, id: i64) -> Result<ApiResponse<Assignment>, AppError> {
        let assignment = self.store.end_assignment(id, Utc::now()).await?;
        info!("🏁 Asignación finalizada: id={} encontrada={}", id, assignment.is_some());
        Ok(ApiResponse::maybe(assignment))
    }
}
