use async_trait::async_trait;

use crate::models::trip::{Trip, TripDraft, TripView};
use crate::repositories::postgres::PgFleetStore;
use crate::utils::errors::AppResult;

#[async_trait]
pub trait TripRepository: Send + Sync {
    async fn list_trips(&self) -> AppResult<Vec<TripView>>;
    async fn create_trip(&self, trip: TripDraft) -> AppResult<Trip>;
    /// Campos descriptivos en `None` conservan su valor; montos, odómetros,
    /// `end_time` y sus derivados se reemplazan juntos
    async fn update_trip(&self, id: i64, trip: TripDraft) -> AppResult<Option<Trip>>;
    async fn delete_trip(&self, id: i64) -> AppResult<()>;
}

#[async_trait]
impl TripRepository for PgFleetStore {
    async fn list_trips(&self) -> AppResult<Vec<TripView>> {
        let trips = sqlx::query_as::<_, TripView>(
            r#"
            SELECT t.*,
                CASE WHEN v.id IS NULL THEN NULL
                     ELSE json_build_object('id', v.id, 'reg_number', v.reg_number, 'brand', v.brand)
                END AS vehicle,
                CASE WHEN d.id IS NULL THEN NULL
                     ELSE json_build_object('id', d.id, 'name', d.name, 'phone', d.phone)
                END AS driver
            FROM trips t
            LEFT JOIN vehicles v ON v.id = t.vehicle_id
            LEFT JOIN drivers d ON d.id = t.driver_id
            ORDER BY t.start_time DESC, t.id DESC
            "#
        )
        .fetch_all(self.pool())
        .await?;

        Ok(trips)
    }

    async fn create_trip(&self, trip: TripDraft) -> AppResult<Trip> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips (
                vehicle_id, driver_id, start_time, end_time, start_odometer, end_odometer,
                distance, route, notes, status, price, fuel_cost, driver_cost, other_costs,
                total_costs, profit, profit_margin, cargo_type, cargo_weight, client_name
            )
            VALUES ($1, $2, COALESCE($3, NOW()), $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
            RETURNING *
            "#
        )
        .bind(trip.vehicle_id)
        .bind(trip.driver_id)
        .bind(trip.start_time)
        .bind(trip.end_time)
        .bind(trip.start_odometer)
        .bind(trip.end_odometer)
        .bind(trip.distance)
        .bind(trip.route)
        .bind(trip.notes)
        .bind(trip.status)
        .bind(trip.price)
        .bind(trip.fuel_cost)
        .bind(trip.driver_cost)
        .bind(trip.other_costs)
        .bind(trip.total_costs)
        .bind(trip.profit)
        .bind(trip.profit_margin)
        .bind(trip.cargo_type)
        .bind(trip.cargo_weight)
        .bind(trip.client_name)
        .fetch_one(self.pool())
        .await?;

        Ok(trip)
    }

    async fn update_trip(&self, id: i64, trip: TripDraft) -> AppResult<Option<Trip>> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET vehicle_id = COALESCE($2, vehicle_id),
                driver_id = COALESCE($3, driver_id),
                start_time = COALESCE($4, start_time),
                end_time = $5,
                start_odometer = $6, end_odometer = $7, distance = $8,
                route = COALESCE($9, route),
                notes = COALESCE($10, notes),
                status = $11, price = $12, fuel_cost = $13, driver_cost = $14,
                other_costs = $15, total_costs = $16, profit = $17, profit_margin = $18,
                cargo_type = COALESCE($19, cargo_type),
                cargo_weight = COALESCE($20, cargo_weight),
                client_name = COALESCE($21, client_name),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .bind(trip.vehicle_id)
        .bind(trip.driver_id)
        .bind(trip.start_time)
        .bind(trip.end_time)
        .bind(trip.start_odometer)
        .bind(trip.end_odometer)
        .bind(trip.distance)
        .bind(trip.route)
        .bind(trip.notes)
        .bind(trip.status)
        .bind(trip.price)
        .bind(trip.fuel_cost)
        .bind(trip.driver_cost)
        .bind(trip.other_costs)
        .bind(trip.total_costs)
        .bind(trip.profit)
        .bind(trip.profit_margin)
        .bind(trip.cargo_type)
        .bind(trip.cargo_weight)
        .bind(trip.client_name)
        .fetch_optional(self.pool())
        .await?;

        Ok(trip)
    }

    async fn delete_trip(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(())
    }
}
