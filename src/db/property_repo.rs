// src/db/property_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::property::Property};

#[derive(Clone)]
pub struct PropertyRepository {
    pool: PgPool,
}

impl PropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        title: &str,
        description: Option<&str>,
        address: &str,
        city: &str,
        price: Decimal,
        bedrooms: i32,
        bathrooms: i32,
        category_id: Option<Uuid>,
        owner_id: Uuid,
    ) -> Result<Property, AppError> {
        let property = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (title, description, address, city, price, bedrooms, bathrooms, category_id, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(address)
        .bind(city)
        .bind(price)
        .bind(bedrooms)
        .bind(bathrooms)
        .bind(category_id)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(property)
    }

    pub async fn get_all(&self) -> Result<Vec<Property>, AppError> {
        let properties =
            sqlx::query_as::<_, Property>("SELECT * FROM properties ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(properties)
    }

    pub async fn get_available(&self) -> Result<Vec<Property>, AppError> {
        let properties = sqlx::query_as::<_, Property>(
            "SELECT * FROM properties WHERE available = TRUE ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(properties)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, AppError> {
        let property = sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(property)
    }

    pub async fn find_by_city(&self, city: &str) -> Result<Vec<Property>, AppError> {
        let properties = sqlx::query_as::<_, Property>(
            "SELECT * FROM properties WHERE city ILIKE $1 ORDER BY created_at DESC",
        )
        .bind(city)
        .fetch_all(&self.pool)
        .await?;
        Ok(properties)
    }

    pub async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Property>, AppError> {
        let properties = sqlx::query_as::<_, Property>(
            "SELECT * FROM properties WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(properties)
    }

    // Trava a linha da propriedade dentro da transação de aprovação.
    // Quem chegar segundo espera aqui e revê a disponibilidade já atualizada.
    pub async fn find_by_id_for_update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<Property>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let property =
            sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(executor)
                .await?;
        Ok(property)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        title: &str,
        description: Option<&str>,
        address: &str,
        city: &str,
        price: Decimal,
        bedrooms: i32,
        bathrooms: i32,
        available: bool,
    ) -> Result<Property, AppError> {
        sqlx::query_as::<_, Property>(
            r#"
            UPDATE properties
            SET title = $2, description = $3, address = $4, city = $5,
                price = $6, bedrooms = $7, bathrooms = $8, available = $9,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(address)
        .bind(city)
        .bind(price)
        .bind(bedrooms)
        .bind(bathrooms)
        .bind(available)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::PropertyNotFound)
    }

    // Ocupa ou libera a propriedade; usado pela aprovação e pelo sweep de expirados
    pub async fn set_availability<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        available: bool,
        occupied_until: Option<NaiveDate>,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            "UPDATE properties SET available = $2, occupied_until = $3, updated_at = now() WHERE id = $1",
        )
        .bind(id)
        .bind(available)
        .bind(occupied_until)
        .execute(executor)
        .await?;
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::PropertyNotFound);
        }
        Ok(())
    }

    // =========================================================================
    //  OPERAÇÕES EM LOTE (admin)
    // =========================================================================

    // Multiplica o preço de todas as propriedades de uma cidade pelo fator dado
    pub async fn scale_prices_by_city<'e, E>(
        &self,
        executor: E,
        city: &str,
        factor: Decimal,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            "UPDATE properties SET price = ROUND(price * $2, 2), updated_at = now() WHERE city ILIKE $1",
        )
        .bind(city)
        .bind(factor)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    // Ajuste de inflação: todas as propriedades do sistema
    pub async fn scale_all_prices<'e, E>(&self, executor: E, factor: Decimal) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result =
            sqlx::query("UPDATE properties SET price = ROUND(price * $1, 2), updated_at = now()")
                .bind(factor)
                .execute(executor)
                .await?;
        Ok(result.rows_affected())
    }

    pub async fn set_availability_by_owner<'e, E>(
        &self,
        executor: E,
        owner_id: Uuid,
        available: bool,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            "UPDATE properties SET available = $2, updated_at = now() WHERE owner_id = $1",
        )
        .bind(owner_id)
        .bind(available)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }
}
