use async_trait::async_trait;

use crate::models::driver::{Driver, DriverChanges, NewDriver};
use crate::repositories::postgres::PgFleetStore;
use crate::utils::errors::AppResult;

#[async_trait]
pub trait DriverRepository: Send + Sync {
    async fn list_drivers(&self) -> AppResult<Vec<Driver>>;
    async fn create_driver(&self, driver: NewDriver) -> AppResult<Driver>;
    async fn update_driver(&self, id: i64, changes: DriverChanges) -> AppResult<Option<Driver>>;
    async fn delete_driver(&self, id: i64) -> AppResult<()>;
}

#[async_trait]
impl DriverRepository for PgFleetStore {
    async fn list_drivers(&self) -> AppResult<Vec<Driver>> {
        let drivers = sqlx::query_as::<_, Driver>("SELECT * FROM drivers ORDER BY id ASC")
            .fetch_all(self.pool())
            .await?;

        Ok(drivers)
    }

    async fn create_driver(&self, driver: NewDriver) -> AppResult<Driver> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers (name, phone, license_number, license_category, hire_date, status)
            VALUES ($1, $2, $3, $4, $5, 'active')
            RETURNING *
            "#
        )
        .bind(driver.name)
        .bind(driver.phone)
        .bind(driver.license_number)
        .bind(driver.license_category)
        .bind(driver.hire_date)
        .fetch_one(self.pool())
        .await?;

        Ok(driver)
    }

    async fn update_driver(&self, id: i64, changes: DriverChanges) -> AppResult<Option<Driver>> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            UPDATE drivers
            SET name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                license_number = COALESCE($4, license_number),
                license_category = COALESCE($5, license_category),
                status = COALESCE($6, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.phone)
        .bind(changes.license_number)
        .bind(changes.license_category)
        .bind(changes.status)
        .fetch_optional(self.pool())
        .await?;

        Ok(driver)
    }

    async fn delete_driver(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM drivers WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(())
    }
}
