// src/models/report.rs

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

// Resumo financeiro do marketplace (visão do admin)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport {
    #[schema(example = "Financial Report")]
    pub title: String,

    // Soma dos pagamentos com status PAID
    pub total_revenue: Decimal,

    pub total_properties: i64,
    pub total_rentals: i64,

    // Preço médio das propriedades cadastradas
    pub average_rent: Decimal,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityCount {
    pub city: String,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
    pub average: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatistics {
    pub total_users: i64,
    pub admin_users: i64,
    pub regular_users: i64,
    pub total_properties: i64,
    pub available_properties: i64,
    pub occupied_properties: i64,
    pub properties_by_city: Vec<CityCount>,
    pub price_range: PriceRange,
}
