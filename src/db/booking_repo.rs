// src/db/booking_repo.rs

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::booking::{Booking, BookingStatus, BookingStatusCount},
};

#[derive(Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        property_id: Uuid,
        user_id: Option<Uuid>,
        contact_name: &str,
        contact_email: &str,
        contact_phone: Option<&str>,
        message: Option<&str>,
        preferred_visit_date: Option<DateTime<Utc>>,
    ) -> Result<Booking, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (property_id, user_id, contact_name, contact_email, contact_phone, message, preferred_visit_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(property_id)
        .bind(user_id)
        .bind(contact_name)
        .bind(contact_email)
        .bind(contact_phone)
        .bind(message)
        .bind(preferred_visit_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(booking)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(booking)
    }

    pub async fn get_all(&self) -> Result<Vec<Booking>, AppError> {
        let bookings =
            sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(bookings)
    }

    pub async fn find_by_property(&self, property_id: Uuid) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE property_id = $1 ORDER BY created_at DESC",
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(bookings)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(bookings)
    }

    // Reservas sobre as propriedades de um proprietário
    pub async fn find_by_property_owner(&self, owner_id: Uuid) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT b.* FROM bookings b
            JOIN properties p ON p.id = b.property_id
            WHERE p.owner_id = $1
            ORDER BY b.created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(bookings)
    }

    pub async fn find_by_status(&self, status: BookingStatus) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE status = $1 ORDER BY created_at DESC",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;
        Ok(bookings)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        contact_name: &str,
        contact_email: &str,
        contact_phone: Option<&str>,
        message: Option<&str>,
        status: BookingStatus,
        preferred_visit_date: Option<DateTime<Utc>>,
    ) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET contact_name = $2, contact_email = $3, contact_phone = $4,
                message = $5, status = $6, preferred_visit_date = $7, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(contact_name)
        .bind(contact_email)
        .bind(contact_phone)
        .bind(message)
        .bind(status)
        .bind(preferred_visit_date)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::BookingNotFound)
    }

    pub async fn update_status(&self, id: Uuid, status: BookingStatus) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::BookingNotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::BookingNotFound);
        }
        Ok(())
    }

    pub async fn count_by_status(&self) -> Result<Vec<BookingStatusCount>, AppError> {
        let counts = sqlx::query_as::<_, BookingStatusCount>(
            "SELECT status, COUNT(*) AS total FROM bookings GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(counts)
    }
}
