// src/handlers/properties.rs

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
    models::property::Property,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyPayload {
    #[validate(length(min = 3, max = 200, message = "O título deve ter entre 3 e 200 caracteres."))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "O endereço é obrigatório."))]
    pub address: String,
    #[validate(length(min = 1, message = "A cidade é obrigatória."))]
    pub city: String,
    #[schema(value_type = f64, example = 950.0)]
    pub price: Decimal,
    #[validate(range(min = 0, message = "Número de quartos inválido."))]
    pub bedrooms: i32,
    #[validate(range(min = 0, message = "Número de banheiros inválido."))]
    pub bathrooms: i32,
    pub category_name: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertyPayload {
    #[validate(length(min = 3, max = 200, message = "O título deve ter entre 3 e 200 caracteres."))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "O endereço é obrigatório."))]
    pub address: String,
    #[validate(length(min = 1, message = "A cidade é obrigatória."))]
    pub city: String,
    #[schema(value_type = f64, example = 950.0)]
    pub price: Decimal,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub available: bool,
}

// --- Rotas públicas ---

#[utoipa::path(
    get,
    path = "/api/properties",
    tag = "Properties",
    responses((status = 200, description = "Todas as propriedades", body = Vec<Property>))
)]
pub async fn get_all(State(app_state): State<AppState>) -> Result<Json<Vec<Property>>, AppError> {
    Ok(Json(app_state.property_service.get_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/properties/available",
    tag = "Properties",
    responses((status = 200, description = "Propriedades disponíveis", body = Vec<Property>))
)]
pub async fn get_available(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Property>>, AppError> {
    Ok(Json(app_state.property_service.get_available().await?))
}

#[utoipa::path(
    get,
    path = "/api/properties/city/{city}",
    tag = "Properties",
    params(("city" = String, Path, description = "Cidade")),
    responses((status = 200, description = "Propriedades da cidade", body = Vec<Property>))
)]
pub async fn get_by_city(
    State(app_state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<Vec<Property>>, AppError> {
    Ok(Json(app_state.property_service.get_by_city(&city).await?))
}

#[utoipa::path(
    get,
    path = "/api/properties/{id}",
    tag = "Properties",
    params(("id" = Uuid, Path, description = "ID da propriedade")),
    responses(
        (status = 200, description = "Propriedade", body = Property),
        (status = 404, description = "Propriedade não encontrada")
    )
)]
pub async fn get_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Property>, AppError> {
    Ok(Json(app_state.property_service.get_by_id(id).await?))
}

// --- Rotas autenticadas ---

#[utoipa::path(
    post,
    path = "/api/properties",
    tag = "Properties",
    request_body = CreatePropertyPayload,
    responses(
        (status = 200, description = "Propriedade criada", body = Property),
        (status = 404, description = "Categoria não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreatePropertyPayload>,
) -> Result<Json<Property>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let property = app_state
        .property_service
        .create_property(
            &user,
            &payload.title,
            payload.description.as_deref(),
            &payload.address,
            &payload.city,
            payload.price,
            payload.bedrooms,
            payload.bathrooms,
            payload.category_name.as_deref(),
        )
        .await?;

    Ok(Json(property))
}

// Propriedades do usuário autenticado
#[utoipa::path(
    get,
    path = "/api/properties/mine",
    tag = "Properties",
    responses((status = 200, description = "Minhas propriedades", body = Vec<Property>)),
    security(("api_jwt" = []))
)]
pub async fn get_mine(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<Property>>, AppError> {
    Ok(Json(app_state.property_service.get_by_owner(user.id).await?))
}

#[utoipa::path(
    put,
    path = "/api/properties/{id}",
    tag = "Properties",
    params(("id" = Uuid, Path, description = "ID da propriedade")),
    request_body = UpdatePropertyPayload,
    responses(
        (status = 200, description = "Propriedade atualizada", body = Property),
        (status = 403, description = "Apenas o proprietário pode alterar")
    ),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePropertyPayload>,
) -> Result<Json<Property>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let property = app_state
        .property_service
        .update_property(
            &user,
            id,
            &payload.title,
            payload.description.as_deref(),
            &payload.address,
            &payload.city,
            payload.price,
            payload.bedrooms,
            payload.bathrooms,
            payload.available,
        )
        .await?;

    Ok(Json(property))
}

#[utoipa::path(
    delete,
    path = "/api/properties/{id}",
    tag = "Properties",
    params(("id" = Uuid, Path, description = "ID da propriedade")),
    responses(
        (status = 200, description = "Propriedade removida"),
        (status = 403, description = "Apenas o proprietário pode remover")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    app_state.property_service.delete_property(&user, id).await?;
    Ok(Json(serde_json::json!({ "message": "Propriedade removida com sucesso." })))
}
