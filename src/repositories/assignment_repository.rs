use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::assignment::{Assignment, AssignmentView, NewAssignment};
use crate::repositories::postgres::PgFleetStore;
use crate::utils::errors::AppResult;

#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Asignaciones con `ended_at IS NULL`, las más recientes primero
    async fn list_active_assignments(&self) -> AppResult<Vec<AssignmentView>>;
    async fn create_assignment(&self, assignment: NewAssignment) -> AppResult<Assignment>;
    async fn end_assignment(&self, id: i64, ended_at: DateTime<Utc>) -> AppResult<Option<Assignment>>;
}

#[async_trait]
impl AssignmentRepository for PgFleetStore {
    async fn list_active_assignments(&self) -> AppResult<Vec<AssignmentView>> {
        let assignments = sqlx::query_as::<_, AssignmentView>(
            r#"
            SELECT a.*,
                CASE WHEN v.id IS NULL THEN NULL
                     ELSE json_build_object('id', v.id, 'reg_number', v.reg_number, 'brand', v.brand)
                END AS vehicle,
                CASE WHEN d.id IS NULL THEN NULL
                     ELSE json_build_object('id', d.id, 'name', d.name, 'phone', d.phone)
                END AS driver
            FROM vehicle_assignments a
            LEFT JOIN vehicles v ON v.id = a.vehicle_id
            LEFT JOIN drivers d ON d.id = a.driver_id
            WHERE a.ended_at IS NULL
            ORDER BY a.assigned_at DESC, a.id DESC
            "#
        )
        .fetch_all(self.pool())
        .await?;

        Ok(assignments)
    }

    async fn create_assignment(&self, assignment: NewAssignment) -> AppResult<Assignment> {
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            INSERT INTO vehicle_assignments (vehicle_id, driver_id, notes)
            VALUES ($1, $2, $3)
            RETURNING *
            "#
        )
        .bind(assignment.vehicle_id)
        .bind(assignment.driver_id)
        .bind(assignment.notes)
        .fetch_one(self.pool())
        .await?;

        Ok(assignment)
    }

    async fn end_assignment(&self, id: i64, ended_at: DateTime<Utc>) -> AppResult<Option<Assignment>> {
        let assignment = sqlx::query_as::<_, Assignment>(
            "UPDATE vehicle_assignments SET ended_at = $2 WHERE id = $1 RETURNING *"
        )
        .bind(id)
        .bind(ended_at)
        .fetch_optional(self.pool())
        .await?;

        Ok(assignment)
    }
}
