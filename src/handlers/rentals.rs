// src/handlers/rentals.rs

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
    middleware::auth::{AdminUser, AuthenticatedUser},
    models::rental::{Rental, RentalView},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalPayload {
    pub property_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[schema(value_type = f64, example = 950.0)]
    pub monthly_rent: Decimal,
    #[validate(length(max = 2000, message = "A mensagem é longa demais."))]
    pub request_message: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRentalPayload {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[schema(value_type = f64, example = 950.0)]
    pub monthly_rent: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RentalDecisionPayload {
    #[validate(length(max = 2000, message = "A mensagem é longa demais."))]
    pub message: Option<String>,
}

// Listagem completa: visão de moderação
#[utoipa::path(
    get,
    path = "/api/rentals",
    tag = "Rentals",
    responses((status = 200, description = "Todos os contratos", body = Vec<RentalView>)),
    security(("api_jwt" = []))
)]
pub async fn get_all(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<Vec<RentalView>>, AppError> {
    Ok(Json(app_state.rental_service.get_all().await?))
}

// Pedidos que fiz como inquilino
#[utoipa::path(
    get,
    path = "/api/rentals/my-requests",
    tag = "Rentals",
    responses((status = 200, description = "Meus pedidos de aluguel", body = Vec<RentalView>)),
    security(("api_jwt" = []))
)]
pub async fn my_requests(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<RentalView>>, AppError> {
    Ok(Json(app_state.rental_service.my_requests(user.id).await?))
}

// Pedidos recebidos nas minhas propriedades
#[utoipa::path(
    get,
    path = "/api/rentals/property-requests",
    tag = "Rentals",
    responses((status = 200, description = "Pedidos nas minhas propriedades", body = Vec<RentalView>)),
    security(("api_jwt" = []))
)]
pub async fn property_requests(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<RentalView>>, AppError> {
    Ok(Json(app_state.rental_service.property_requests(user.id).await?))
}

#[utoipa::path(
    get,
    path = "/api/rentals/{id}",
    tag = "Rentals",
    params(("id" = Uuid, Path, description = "ID do contrato")),
    responses(
        (status = 200, description = "Contrato", body = RentalView),
        (status = 404, description = "Contrato não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_by_id(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<RentalView>, AppError> {
    Ok(Json(app_state.rental_service.get_by_id(id).await?))
}

// Cria um pedido de aluguel (nasce PENDING)
#[utoipa::path(
    post,
    path = "/api/rentals",
    tag = "Rentals",
    request_body = CreateRentalPayload,
    responses(
        (status = 200, description = "Pedido criado", body = Rental),
        (status = 400, description = "Propriedade indisponível ou pedido inválido"),
        (status = 404, description = "Propriedade não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateRentalPayload>,
) -> Result<Json<Rental>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let rental = app_state
        .rental_service
        .create_request(
            &user,
            payload.property_id,
            payload.start_date,
            payload.end_date,
            payload.monthly_rent,
            payload.request_message.as_deref(),
        )
        .await?;

    Ok(Json(rental))
}

// Aprova um pedido pendente; rejeita os concorrentes e ocupa a propriedade
#[utoipa::path(
    post,
    path = "/api/rentals/{id}/approve",
    tag = "Rentals",
    params(("id" = Uuid, Path, description = "ID do contrato")),
    request_body = RentalDecisionPayload,
    responses(
        (status = 200, description = "Contrato aprovado", body = Rental),
        (status = 400, description = "Pedido não está pendente ou propriedade ocupada"),
        (status = 403, description = "Apenas o proprietário aprova")
    ),
    security(("api_jwt" = []))
)]
pub async fn approve(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    payload: Option<Json<RentalDecisionPayload>>,
) -> Result<Json<Rental>, AppError> {
    // O corpo é opcional: aprovar sem mensagem é válido
    let message = match payload {
        Some(Json(p)) => {
            p.validate().map_err(AppError::ValidationError)?;
            p.message
        }
        None => None,
    };

    let rental = app_state
        .rental_service
        .approve(&user, id, message.as_deref())
        .await?;

    Ok(Json(rental))
}

#[utoipa::path(
    post,
    path = "/api/rentals/{id}/reject",
    tag = "Rentals",
    params(("id" = Uuid, Path, description = "ID do contrato")),
    request_body = RentalDecisionPayload,
    responses(
        (status = 200, description = "Contrato rejeitado", body = Rental),
        (status = 400, description = "Pedido não está pendente"),
        (status = 403, description = "Apenas o proprietário rejeita")
    ),
    security(("api_jwt" = []))
)]
pub async fn reject(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    payload: Option<Json<RentalDecisionPayload>>,
) -> Result<Json<Rental>, AppError> {
    let message = match payload {
        Some(Json(p)) => {
            p.validate().map_err(AppError::ValidationError)?;
            p.message
        }
        None => None,
    };

    let rental = app_state
        .rental_service
        .reject(&user, id, message.as_deref())
        .await?;

    Ok(Json(rental))
}

#[utoipa::path(
    put,
    path = "/api/rentals/{id}",
    tag = "Rentals",
    params(("id" = Uuid, Path, description = "ID do contrato")),
    request_body = UpdateRentalPayload,
    responses(
        (status = 200, description = "Contrato atualizado", body = Rental),
        (status = 400, description = "Contrato encerrado ou datas inválidas")
    ),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRentalPayload>,
) -> Result<Json<Rental>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let rental = app_state
        .rental_service
        .update_terms(&user, id, payload.start_date, payload.end_date, payload.monthly_rent)
        .await?;

    Ok(Json(rental))
}

#[utoipa::path(
    delete,
    path = "/api/rentals/{id}",
    tag = "Rentals",
    params(("id" = Uuid, Path, description = "ID do contrato")),
    responses((status = 200, description = "Contrato removido, propriedade liberada")),
    security(("api_jwt" = []))
)]
pub async fn delete(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    app_state.rental_service.delete(&user, id).await?;
    Ok(Json(serde_json::json!({ "message": "Contrato removido com sucesso." })))
}

// Sweep: termina os contratos vencidos e libera as propriedades
#[utoipa::path(
    post,
    path = "/api/rentals/finalize-expired",
    tag = "Rentals",
    responses((status = 200, description = "Quantidade de contratos finalizados")),
    security(("api_jwt" = []))
)]
pub async fn finalize_expired(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> Result<Json<serde_json::Value>, AppError> {
    let finalized = app_state.rental_service.finalize_expired().await?;
    Ok(Json(serde_json::json!({
        "message": "Contratos vencidos finalizados com sucesso.",
        "finalized": finalized,
    })))
}
