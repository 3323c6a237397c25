// src/db/rental_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::rental::{Rental, RentalStatus, RentalView},
};

const VIEW_SELECT: &str = r#"
    SELECT r.id, r.property_id, p.title AS property_title,
           r.tenant_id, u.username AS tenant_username,
           r.start_date, r.end_date, r.monthly_rent, r.status,
           r.request_message, r.response_message,
           r.approved_at, r.rejected_at, r.created_at
    FROM rentals r
    JOIN properties p ON p.id = r.property_id
    JOIN users u ON u.id = r.tenant_id
"#;

#[derive(Clone)]
pub struct RentalRepository {
    pool: PgPool,
}

impl RentalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        property_id: Uuid,
        tenant_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        monthly_rent: Decimal,
        request_message: Option<&str>,
    ) -> Result<Rental, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rental = sqlx::query_as::<_, Rental>(
            r#"
            INSERT INTO rentals (property_id, tenant_id, start_date, end_date, monthly_rent, request_message)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(property_id)
        .bind(tenant_id)
        .bind(start_date)
        .bind(end_date)
        .bind(monthly_rent)
        .bind(request_message)
        .fetch_one(executor)
        .await?;

        Ok(rental)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Rental>, AppError> {
        let rental = sqlx::query_as::<_, Rental>("SELECT * FROM rentals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(rental)
    }

    // Trava a linha do contrato dentro da transação de aprovação/rejeição
    pub async fn find_by_id_for_update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<Rental>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rental = sqlx::query_as::<_, Rental>("SELECT * FROM rentals WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(rental)
    }

    pub async fn get_all_views(&self) -> Result<Vec<RentalView>, AppError> {
        let sql = format!("{VIEW_SELECT} ORDER BY r.created_at DESC");
        let rentals = sqlx::query_as::<_, RentalView>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rentals)
    }

    pub async fn find_view_by_id(&self, id: Uuid) -> Result<Option<RentalView>, AppError> {
        let sql = format!("{VIEW_SELECT} WHERE r.id = $1");
        let rental = sqlx::query_as::<_, RentalView>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(rental)
    }

    // Pedidos feitos pelo usuário como inquilino
    pub async fn views_by_tenant(&self, tenant_id: Uuid) -> Result<Vec<RentalView>, AppError> {
        let sql = format!("{VIEW_SELECT} WHERE r.tenant_id = $1 ORDER BY r.created_at DESC");
        let rentals = sqlx::query_as::<_, RentalView>(&sql)
            .bind(tenant_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rentals)
    }

    // Pedidos recebidos nas propriedades do usuário
    pub async fn views_by_property_owner(&self, owner_id: Uuid) -> Result<Vec<RentalView>, AppError> {
        let sql = format!("{VIEW_SELECT} WHERE p.owner_id = $1 ORDER BY r.created_at DESC");
        let rentals = sqlx::query_as::<_, RentalView>(&sql)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rentals)
    }

    pub async fn approve<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        response_message: Option<&str>,
    ) -> Result<Rental, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rental = sqlx::query_as::<_, Rental>(
            r#"
            UPDATE rentals
            SET status = $2, approved_at = now(), response_message = $3, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(RentalStatus::Approved)
        .bind(response_message)
        .fetch_one(executor)
        .await?;

        Ok(rental)
    }

    pub async fn reject<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        response_message: Option<&str>,
    ) -> Result<Rental, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rental = sqlx::query_as::<_, Rental>(
            r#"
            UPDATE rentals
            SET status = $2, rejected_at = now(), response_message = $3, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(RentalStatus::Rejected)
        .bind(response_message)
        .fetch_one(executor)
        .await?;

        Ok(rental)
    }

    // Aprovar um pedido rejeita todos os outros PENDING da mesma propriedade
    pub async fn reject_competing_pending<'e, E>(
        &self,
        executor: E,
        property_id: Uuid,
        winner_id: Uuid,
        auto_message: &str,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            UPDATE rentals
            SET status = $3, rejected_at = now(), response_message = $4, updated_at = now()
            WHERE property_id = $1 AND id <> $2 AND status = $5
            "#,
        )
        .bind(property_id)
        .bind(winner_id)
        .bind(RentalStatus::Rejected)
        .bind(auto_message)
        .bind(RentalStatus::Pending)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn update_terms(
        &self,
        id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        monthly_rent: Decimal,
    ) -> Result<Rental, AppError> {
        sqlx::query_as::<_, Rental>(
            r#"
            UPDATE rentals
            SET start_date = $2, end_date = $3, monthly_rent = $4, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(start_date)
        .bind(end_date)
        .bind(monthly_rent)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::RentalNotFound)
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM rentals WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::RentalNotFound);
        }
        Ok(())
    }

    // Sweep de expiração: termina todos os contratos ocupantes vencidos
    // e devolve as propriedades liberadas.
    pub async fn terminate_expired<'e, E>(
        &self,
        executor: E,
        today: NaiveDate,
    ) -> Result<Vec<Uuid>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let property_ids = sqlx::query_scalar::<_, Uuid>(
            r#"
            UPDATE rentals
            SET status = $2, updated_at = now()
            WHERE (status = $3 OR status = $4) AND end_date < $1
            RETURNING property_id
            "#,
        )
        .bind(today)
        .bind(RentalStatus::Terminated)
        .bind(RentalStatus::Approved)
        .bind(RentalStatus::Active)
        .fetch_all(executor)
        .await?;

        Ok(property_ids)
    }
}
