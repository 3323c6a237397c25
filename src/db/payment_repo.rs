// src/db/payment_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::payment::{Payment, PaymentStatus},
};

#[derive(Clone)]
pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        rental_id: Uuid,
        amount: Decimal,
        payment_date: NaiveDate,
        status: PaymentStatus,
        notes: Option<&str>,
    ) -> Result<Payment, AppError> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (rental_id, amount, payment_date, status, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(rental_id)
        .bind(amount)
        .bind(payment_date)
        .bind(status)
        .bind(notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(payment)
    }

    pub async fn find_by_rental(&self, rental_id: Uuid) -> Result<Vec<Payment>, AppError> {
        let payments = sqlx::query_as::<_, Payment>(
            "SELECT * FROM payments WHERE rental_id = $1 ORDER BY payment_date ASC",
        )
        .bind(rental_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(payments)
    }
}
