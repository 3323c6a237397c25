// src/models/property.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,

    #[schema(example = "Apartamento no centro")]
    pub title: String,

    pub description: Option<String>,

    #[schema(example = "Rua das Flores, 123")]
    pub address: String,

    #[schema(example = "Madrid")]
    pub city: String,

    #[schema(example = "950.00")]
    pub price: Decimal,

    #[schema(example = 2)]
    pub bedrooms: i32,

    #[schema(example = 1)]
    pub bathrooms: i32,

    pub available: bool,

    // Preenchido quando um contrato é aprovado; limpo quando a propriedade é liberada
    pub occupied_until: Option<NaiveDate>,

    pub category_id: Option<Uuid>,
    pub owner_id: Uuid,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
