// src/handlers/maintenance.rs

use axum::{
    extract::{Path, State},
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::maintenance::{Maintenance, MaintenanceStatus},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaintenancePayload {
    pub property_id: Uuid,
    #[validate(length(min = 1, max = 200, message = "O título deve ter entre 1 e 200 caracteres."))]
    pub title: String,
    pub description: Option<String>,
    #[schema(value_type = f64, example = 120.0)]
    pub cost: Option<Decimal>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMaintenanceStatusPayload {
    pub status: MaintenanceStatus,
}

#[utoipa::path(
    post,
    path = "/api/maintenance",
    tag = "Maintenance",
    request_body = CreateMaintenancePayload,
    responses(
        (status = 200, description = "Manutenção registrada", body = Maintenance),
        (status = 403, description = "Apenas o proprietário registra manutenções")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateMaintenancePayload>,
) -> Result<Json<Maintenance>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let maintenance = app_state
        .maintenance_service
        .create(
            &user,
            payload.property_id,
            &payload.title,
            payload.description.as_deref(),
            payload.cost,
        )
        .await?;

    Ok(Json(maintenance))
}

#[utoipa::path(
    get,
    path = "/api/maintenance/property/{property_id}",
    tag = "Maintenance",
    params(("property_id" = Uuid, Path, description = "ID da propriedade")),
    responses((status = 200, description = "Manutenções da propriedade", body = Vec<Maintenance>)),
    security(("api_jwt" = []))
)]
pub async fn get_by_property(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(property_id): Path<Uuid>,
) -> Result<Json<Vec<Maintenance>>, AppError> {
    Ok(Json(app_state.maintenance_service.get_by_property(&user, property_id).await?))
}

#[utoipa::path(
    put,
    path = "/api/maintenance/{id}/status",
    tag = "Maintenance",
    params(("id" = Uuid, Path, description = "ID da manutenção")),
    request_body = UpdateMaintenanceStatusPayload,
    responses((status = 200, description = "Estado atualizado", body = Maintenance)),
    security(("api_jwt" = []))
)]
pub async fn update_status(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMaintenanceStatusPayload>,
) -> Result<Json<Maintenance>, AppError> {
    Ok(Json(
        app_state
            .maintenance_service
            .update_status(&user, id, payload.status)
            .await?,
    ))
}
