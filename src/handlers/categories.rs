// src/handlers/categories.rs

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AdminUser,
    models::category::Category,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CategoryPayload {
    #[validate(length(min = 1, max = 100, message = "O nome deve ter entre 1 e 100 caracteres."))]
    pub name: String,
    pub description: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Categories",
    responses((status = 200, description = "Todas as categorias", body = Vec<Category>))
)]
pub async fn get_all(State(app_state): State<AppState>) -> Result<Json<Vec<Category>>, AppError> {
    Ok(Json(app_state.category_service.get_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(("id" = Uuid, Path, description = "ID da categoria")),
    responses(
        (status = 200, description = "Categoria", body = Category),
        (status = 404, description = "Categoria não encontrada")
    )
)]
pub async fn get_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Category>, AppError> {
    Ok(Json(app_state.category_service.get_by_id(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "Categories",
    request_body = CategoryPayload,
    responses(
        (status = 200, description = "Categoria criada", body = Category),
        (status = 409, description = "Categoria já existe")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Json(payload): Json<CategoryPayload>,
) -> Result<Json<Category>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let category = app_state
        .category_service
        .create(&payload.name, payload.description.as_deref())
        .await?;

    Ok(Json(category))
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(("id" = Uuid, Path, description = "ID da categoria")),
    request_body = CategoryPayload,
    responses((status = 200, description = "Categoria atualizada", body = Category)),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<CategoryPayload>,
) -> Result<Json<Category>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let category = app_state
        .category_service
        .update(id, &payload.name, payload.description.as_deref())
        .await?;

    Ok(Json(category))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(("id" = Uuid, Path, description = "ID da categoria")),
    responses((status = 200, description = "Categoria removida")),
    security(("api_jwt" = []))
)]
pub async fn delete(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    app_state.category_service.delete(id).await?;
    Ok(Json(serde_json::json!({ "message": "Categoria removida com sucesso." })))
}
