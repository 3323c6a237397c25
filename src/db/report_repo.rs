// src/db/report_repo.rs

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::auth::UserRole,
    models::payment::PaymentStatus,
    models::report::{CityCount, FinancialReport, PriceRange, SystemStatistics},
};

#[derive(Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Resumo financeiro. Uma transação de leitura garante um snapshot
    // consistente entre os agregados.
    pub async fn financial_report(&self) -> Result<FinancialReport, AppError> {
        let mut tx = self.pool.begin().await?;

        let total_revenue = sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(amount), 0) FROM payments WHERE status = $1",
        )
        .bind(PaymentStatus::Paid)
        .fetch_one(&mut *tx)
        .await?;

        let total_properties = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM properties")
            .fetch_one(&mut *tx)
            .await?;

        let total_rentals = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM rentals")
            .fetch_one(&mut *tx)
            .await?;

        let average_rent =
            sqlx::query_scalar::<_, Decimal>("SELECT COALESCE(AVG(price), 0) FROM properties")
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;

        Ok(FinancialReport {
            title: "Financial Report".to_string(),
            total_revenue,
            total_properties,
            total_rentals,
            average_rent,
        })
    }

    pub async fn system_statistics(&self) -> Result<SystemStatistics, AppError> {
        let mut tx = self.pool.begin().await?;

        let (total_users, admin_users) = sqlx::query_as::<_, (i64, i64)>(
            "SELECT COUNT(*), COUNT(*) FILTER (WHERE role = $1) FROM users",
        )
        .bind(UserRole::Admin)
        .fetch_one(&mut *tx)
        .await?;

        let (total_properties, available_properties) = sqlx::query_as::<_, (i64, i64)>(
            "SELECT COUNT(*), COUNT(*) FILTER (WHERE available) FROM properties",
        )
        .fetch_one(&mut *tx)
        .await?;

        let properties_by_city = sqlx::query_as::<_, CityCount>(
            "SELECT city, COUNT(*) AS total FROM properties GROUP BY city ORDER BY total DESC",
        )
        .fetch_all(&mut *tx)
        .await?;

        let (min, max, average) = sqlx::query_as::<_, (Decimal, Decimal, Decimal)>(
            r#"
            SELECT COALESCE(MIN(price), 0), COALESCE(MAX(price), 0), COALESCE(AVG(price), 0)
            FROM properties
            "#,
        )
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(SystemStatistics {
            total_users,
            admin_users,
            regular_users: total_users - admin_users,
            total_properties,
            available_properties,
            occupied_properties: total_properties - available_properties,
            properties_by_city,
            price_range: PriceRange { min, max, average },
        })
    }
}
