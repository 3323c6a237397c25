// src/db/maintenance_repo.rs

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::maintenance::{Maintenance, MaintenanceStatus},
};

#[derive(Clone)]
pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        property_id: Uuid,
        title: &str,
        description: Option<&str>,
        cost: Option<Decimal>,
    ) -> Result<Maintenance, AppError> {
        let maintenance = sqlx::query_as::<_, Maintenance>(
            r#"
            INSERT INTO maintenances (property_id, title, description, cost)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(property_id)
        .bind(title)
        .bind(description)
        .bind(cost)
        .fetch_one(&self.pool)
        .await?;

        Ok(maintenance)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Maintenance>, AppError> {
        let maintenance =
            sqlx::query_as::<_, Maintenance>("SELECT * FROM maintenances WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(maintenance)
    }

    pub async fn find_by_property(&self, property_id: Uuid) -> Result<Vec<Maintenance>, AppError> {
        let maintenances = sqlx::query_as::<_, Maintenance>(
            "SELECT * FROM maintenances WHERE property_id = $1 ORDER BY created_at DESC",
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(maintenances)
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: MaintenanceStatus,
    ) -> Result<Maintenance, AppError> {
        sqlx::query_as::<_, Maintenance>(
            "UPDATE maintenances SET status = $2, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::MaintenanceNotFound)
    }
}
