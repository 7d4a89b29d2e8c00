use async_trait::async_trait;

use crate::models::fuel::{FuelDraft, FuelRecord, FuelRecordView};
use crate::repositories::postgres::PgFleetStore;
use crate::utils::errors::AppResult;

#[async_trait]
pub trait FuelRepository: Send + Sync {
    async fn list_fuel_records(&self) -> AppResult<Vec<FuelRecordView>>;
    async fn create_fuel_record(&self, record: FuelDraft) -> AppResult<FuelRecord>;
    /// Campos en `None` conservan su valor; litros, precio y `total_cost` se
    /// reemplazan juntos
    async fn update_fuel_record(&self, id: i64, record: FuelDraft) -> AppResult<Option<FuelRecord>>;
    async fn delete_fuel_record(&self, id: i64) -> AppResult<()>;
}

#[async_trait]
impl FuelRepository for PgFleetStore {
    async fn list_fuel_records(&self) -> AppResult<Vec<FuelRecordView>> {
        let records = sqlx::query_as::<_, FuelRecordView>(
            r#"
            SELECT f.*,
                CASE WHEN v.id IS NULL THEN NULL
                     ELSE json_build_object('id', v.id, 'reg_number', v.reg_number, 'brand', v.brand)
                END AS vehicle
            FROM fuel_records f
            LEFT JOIN vehicles v ON v.id = f.vehicle_id
            ORDER BY f.fuel_date DESC, f.id DESC
            "#
        )
        .fetch_all(self.pool())
        .await?;

        Ok(records)
    }

    async fn create_fuel_record(&self, record: FuelDraft) -> AppResult<FuelRecord> {
        let record = sqlx::query_as::<_, FuelRecord>(
            r#"
            INSERT INTO fuel_records (
                vehicle_id, fuel_date, liters, price_per_liter, total_cost,
                odometer, fuel_type, station_name, notes
            )
            VALUES ($1, COALESCE($2, CURRENT_DATE), $3, $4, $5, $6, COALESCE($7, 'diesel'), $8, $9)
            RETURNING *
            "#
        )
        .bind(record.vehicle_id)
        .bind(record.fuel_date)
        .bind(record.liters)
        .bind(record.price_per_liter)
        .bind(record.total_cost)
        .bind(record.odometer)
        .bind(record.fuel_type)
        .bind(record.station_name)
        .bind(record.notes)
        .fetch_one(self.pool())
        .await?;

        Ok(record)
    }

    async fn update_fuel_record(&self, id: i64, record: FuelDraft) -> AppResult<Option<FuelRecord>> {
        let record = sqlx::query_as::<_, FuelRecord>(
            r#"
            UPDATE fuel_records
            SET vehicle_id = COALESCE($2, vehicle_id),
                fuel_date = COALESCE($3, fuel_date),
                liters = $4, price_per_liter = $5, total_cost = $6,
                odometer = COALESCE($7, odometer),
                fuel_type = COALESCE($8, fuel_type),
                station_name = COALESCE($9, station_name),
                notes = COALESCE($10, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .bind(record.vehicle_id)
        .bind(record.fuel_date)
        .bind(record.liters)
        .bind(record.price_per_liter)
        .bind(record.total_cost)
        .bind(record.odometer)
        .bind(record.fuel_type)
        .bind(record.station_name)
        .bind(record.notes)
        .fetch_optional(self.pool())
        .await?;

        Ok(record)
    }

    async fn delete_fuel_record(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM fuel_records WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(())
    }
}
