use async_trait::async_trait;

use crate::models::vehicle::{NewVehicle, Vehicle, VehicleChanges};
use crate::repositories::postgres::PgFleetStore;
use crate::utils::errors::AppResult;

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn list_vehicles(&self) -> AppResult<Vec<Vehicle>>;
    async fn create_vehicle(&self, vehicle: NewVehicle) -> AppResult<Vehicle>;
    async fn update_vehicle(&self, id: i64, changes: VehicleChanges) -> AppResult<Option<Vehicle>>;
    async fn delete_vehicle(&self, id: i64) -> AppResult<()>;
}

#[async_trait]
impl VehicleRepository for PgFleetStore {
    async fn list_vehicles(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY id ASC")
            .fetch_all(self.pool())
            .await?;

        Ok(vehicles)
    }

    async fn create_vehicle(&self, vehicle: NewVehicle) -> AppResult<Vehicle> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (reg_number, brand, type, status)
            VALUES ($1, $2, $3, 'active')
            RETURNING *
            "#
        )
        .bind(vehicle.reg_number)
        .bind(vehicle.brand)
        .bind(vehicle.vehicle_type)
        .fetch_one(self.pool())
        .await?;

        Ok(vehicle)
    }

    async fn update_vehicle(&self, id: i64, changes: VehicleChanges) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET reg_number = COALESCE($2, reg_number),
                brand = COALESCE($3, brand),
                type = COALESCE($4, type),
                status = COALESCE($5, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .bind(changes.reg_number)
        .bind(changes.brand)
        .bind(changes.vehicle_type)
        .bind(changes.status)
        .fetch_optional(self.pool())
        .await?;

        Ok(vehicle)
    }

    async fn delete_vehicle(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(())
    }
}
