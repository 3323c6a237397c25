// src/handlers/bookings.rs

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::{AdminUser, AuthenticatedUser, MaybeUser},
    models::booking::{Booking, BookingStatus, BookingStatusCount},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingPayload {
    pub property_id: Uuid,
    pub contact_name: Option<String>,
    #[validate(email(message = "O e-mail de contato é inválido."))]
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    #[validate(length(max = 2000, message = "A mensagem é longa demais."))]
    pub message: Option<String>,
    pub preferred_visit_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingPayload {
    #[validate(length(min = 1, message = "O nome de contato é obrigatório."))]
    pub contact_name: String,
    #[validate(email(message = "O e-mail de contato é inválido."))]
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub message: Option<String>,
    pub status: BookingStatus,
    pub preferred_visit_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookingStatusPayload {
    pub status: BookingStatus,
}

// Visitantes anônimos também podem pedir uma visita
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "Bookings",
    request_body = CreateBookingPayload,
    responses(
        (status = 200, description = "Reserva criada", body = Booking),
        (status = 400, description = "Contato obrigatório para visitante"),
        (status = 404, description = "Propriedade não encontrada")
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Json(payload): Json<CreateBookingPayload>,
) -> Result<Json<Booking>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let booking = app_state
        .booking_service
        .create_booking(
            user.as_ref(),
            payload.property_id,
            payload.contact_name.as_deref(),
            payload.contact_email.as_deref(),
            payload.contact_phone.as_deref(),
            payload.message.as_deref(),
            payload.preferred_visit_date,
        )
        .await?;

    Ok(Json(booking))
}

#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "Bookings",
    responses((status = 200, description = "Todas as reservas", body = Vec<Booking>)),
    security(("api_jwt" = []))
)]
pub async fn get_all(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<Vec<Booking>>, AppError> {
    Ok(Json(app_state.booking_service.get_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/bookings/pending",
    tag = "Bookings",
    responses((status = 200, description = "Reservas pendentes", body = Vec<Booking>)),
    security(("api_jwt" = []))
)]
pub async fn get_pending(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> Result<Json<Vec<Booking>>, AppError> {
    Ok(Json(app_state.booking_service.get_pending().await?))
}

#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID da reserva")),
    responses(
        (status = 200, description = "Reserva", body = Booking),
        (status = 404, description = "Reserva não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_by_id(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    Ok(Json(app_state.booking_service.get_by_id(id).await?))
}

#[utoipa::path(
    get,
    path = "/api/bookings/property/{property_id}",
    tag = "Bookings",
    params(("property_id" = Uuid, Path, description = "ID da propriedade")),
    responses((status = 200, description = "Reservas da propriedade", body = Vec<Booking>)),
    security(("api_jwt" = []))
)]
pub async fn get_by_property(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(property_id): Path<Uuid>,
) -> Result<Json<Vec<Booking>>, AppError> {
    Ok(Json(app_state.booking_service.get_by_property(property_id).await?))
}

// Minhas reservas como interessado
#[utoipa::path(
    get,
    path = "/api/bookings/mine",
    tag = "Bookings",
    responses((status = 200, description = "Minhas reservas", body = Vec<Booking>)),
    security(("api_jwt" = []))
)]
pub async fn get_mine(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<Booking>>, AppError> {
    Ok(Json(app_state.booking_service.get_by_user(user.id).await?))
}

// Reservas recebidas nas minhas propriedades
#[utoipa::path(
    get,
    path = "/api/bookings/received",
    tag = "Bookings",
    responses((status = 200, description = "Reservas nas minhas propriedades", body = Vec<Booking>)),
    security(("api_jwt" = []))
)]
pub async fn get_received(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<Booking>>, AppError> {
    Ok(Json(app_state.booking_service.get_by_property_owner(user.id).await?))
}

#[utoipa::path(
    get,
    path = "/api/bookings/status/{status}",
    tag = "Bookings",
    params(("status" = BookingStatus, Path, description = "Estado da reserva")),
    responses((status = 200, description = "Reservas no estado", body = Vec<Booking>)),
    security(("api_jwt" = []))
)]
pub async fn get_by_status(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(status): Path<BookingStatus>,
) -> Result<Json<Vec<Booking>>, AppError> {
    Ok(Json(app_state.booking_service.get_by_status(status).await?))
}

#[utoipa::path(
    put,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID da reserva")),
    request_body = UpdateBookingPayload,
    responses((status = 200, description = "Reserva atualizada", body = Booking)),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBookingPayload>,
) -> Result<Json<Booking>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let booking = app_state
        .booking_service
        .update_booking(
            id,
            &payload.contact_name,
            &payload.contact_email,
            payload.contact_phone.as_deref(),
            payload.message.as_deref(),
            payload.status,
            payload.preferred_visit_date,
        )
        .await?;

    Ok(Json(booking))
}

#[utoipa::path(
    put,
    path = "/api/bookings/{id}/status",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID da reserva")),
    request_body = UpdateBookingStatusPayload,
    responses((status = 200, description = "Estado atualizado", body = Booking)),
    security(("api_jwt" = []))
)]
pub async fn update_status(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBookingStatusPayload>,
) -> Result<Json<Booking>, AppError> {
    Ok(Json(app_state.booking_service.update_status(id, payload.status).await?))
}

#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID da reserva")),
    responses((status = 200, description = "Reserva removida")),
    security(("api_jwt" = []))
)]
pub async fn delete(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    app_state.booking_service.delete(id).await?;
    Ok(Json(serde_json::json!({ "message": "Reserva removida com sucesso." })))
}

#[utoipa::path(
    get,
    path = "/api/bookings/stats/count-by-status",
    tag = "Bookings",
    responses((status = 200, description = "Contagem por estado", body = Vec<BookingStatusCount>)),
    security(("api_jwt" = []))
)]
pub async fn count_by_status(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> Result<Json<Vec<BookingStatusCount>>, AppError> {
    Ok(Json(app_state.booking_service.count_by_status().await?))
}
