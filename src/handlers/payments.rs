// src/handlers/payments.rs

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::payment::{Payment, PaymentStatus},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentPayload {
    #[schema(value_type = f64, example = 950.0)]
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub status: PaymentStatus,
    #[validate(length(max = 2000, message = "As observações são longas demais."))]
    pub notes: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/rentals/{id}/payments",
    tag = "Payments",
    params(("id" = Uuid, Path, description = "ID do contrato")),
    request_body = RecordPaymentPayload,
    responses(
        (status = 200, description = "Pagamento registrado", body = Payment),
        (status = 403, description = "Você não participa deste contrato"),
        (status = 404, description = "Contrato não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn record(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(rental_id): Path<Uuid>,
    Json(payload): Json<RecordPaymentPayload>,
) -> Result<Json<Payment>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let payment = app_state
        .payment_service
        .record_payment(
            &user,
            rental_id,
            payload.amount,
            payload.payment_date,
            payload.status,
            payload.notes.as_deref(),
        )
        .await?;

    Ok(Json(payment))
}

#[utoipa::path(
    get,
    path = "/api/rentals/{id}/payments",
    tag = "Payments",
    params(("id" = Uuid, Path, description = "ID do contrato")),
    responses(
        (status = 200, description = "Pagamentos do contrato", body = Vec<Payment>),
        (status = 403, description = "Você não participa deste contrato")
    ),
    security(("api_jwt" = []))
)]
pub async fn list(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(rental_id): Path<Uuid>,
) -> Result<Json<Vec<Payment>>, AppError> {
    Ok(Json(app_state.payment_service.list_payments(&user, rental_id).await?))
}
