// src/handlers/users.rs

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::auth::User,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfilePayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
}

// Perfil público de um usuário
#[utoipa::path(
    get,
    path = "/api/users/{username}",
    tag = "Users",
    params(("username" = String, Path, description = "Username do usuário")),
    responses(
        (status = 200, description = "Perfil do usuário", body = User),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn get_by_username(
    State(app_state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<User>, AppError> {
    let user = app_state.user_service.get_by_username(&username).await?;
    Ok(Json(user))
}

#[utoipa::path(
    get,
    path = "/api/users/profile",
    tag = "Users",
    responses((status = 200, description = "Perfil do usuário autenticado", body = User)),
    security(("api_jwt" = []))
)]
pub async fn get_profile(AuthenticatedUser(user): AuthenticatedUser) -> Json<User> {
    Json(user)
}

#[utoipa::path(
    put,
    path = "/api/users/profile",
    tag = "Users",
    request_body = UpdateProfilePayload,
    responses(
        (status = 200, description = "Perfil atualizado", body = User),
        (status = 409, description = "E-mail já em uso")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_profile(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<UpdateProfilePayload>,
) -> Result<Json<User>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let updated = app_state
        .user_service
        .update_profile(
            user.id,
            &payload.email,
            payload.first_name.as_deref(),
            payload.last_name.as_deref(),
            payload.phone.as_deref(),
            payload.bio.as_deref(),
        )
        .await?;

    Ok(Json(updated))
}
