// src/handlers/messages.rs

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::message::{Message, UnreadCount},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendMessagePayload {
    pub receiver_id: Uuid,
    pub property_id: Option<Uuid>,
    #[validate(length(min = 1, max = 4000, message = "O conteúdo deve ter entre 1 e 4000 caracteres."))]
    pub content: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub term: String,
}

#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "Messages",
    request_body = SendMessagePayload,
    responses(
        (status = 200, description = "Mensagem enviada", body = Message),
        (status = 404, description = "Destinatário ou propriedade não encontrados")
    ),
    security(("api_jwt" = []))
)]
pub async fn send(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<SendMessagePayload>,
) -> Result<Json<Message>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let message = app_state
        .message_service
        .send(&user, payload.receiver_id, payload.property_id, &payload.content)
        .await?;

    Ok(Json(message))
}

// Conversa completa com outro usuário
#[utoipa::path(
    get,
    path = "/api/messages/conversation/{other_id}",
    tag = "Messages",
    params(("other_id" = Uuid, Path, description = "ID do outro usuário")),
    responses((status = 200, description = "Mensagens da conversa", body = Vec<Message>)),
    security(("api_jwt" = []))
)]
pub async fn conversation(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(other_id): Path<Uuid>,
) -> Result<Json<Vec<Message>>, AppError> {
    Ok(Json(app_state.message_service.conversation(&user, other_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/messages/sent",
    tag = "Messages",
    responses((status = 200, description = "Mensagens enviadas", body = Vec<Message>)),
    security(("api_jwt" = []))
)]
pub async fn sent(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<Message>>, AppError> {
    Ok(Json(app_state.message_service.sent_by(&user).await?))
}

#[utoipa::path(
    get,
    path = "/api/messages/received",
    tag = "Messages",
    responses((status = 200, description = "Mensagens recebidas", body = Vec<Message>)),
    security(("api_jwt" = []))
)]
pub async fn received(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<Message>>, AppError> {
    Ok(Json(app_state.message_service.received_by(&user).await?))
}

#[utoipa::path(
    get,
    path = "/api/messages/unread",
    tag = "Messages",
    responses((status = 200, description = "Mensagens não lidas", body = Vec<Message>)),
    security(("api_jwt" = []))
)]
pub async fn unread(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<Message>>, AppError> {
    Ok(Json(app_state.message_service.unread(&user).await?))
}

#[utoipa::path(
    get,
    path = "/api/messages/unread/count",
    tag = "Messages",
    responses((status = 200, description = "Total de não lidas", body = UnreadCount)),
    security(("api_jwt" = []))
)]
pub async fn unread_count(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<UnreadCount>, AppError> {
    let unread = app_state.message_service.count_unread(&user).await?;
    Ok(Json(UnreadCount { unread }))
}

#[utoipa::path(
    put,
    path = "/api/messages/{id}/read",
    tag = "Messages",
    params(("id" = Uuid, Path, description = "ID da mensagem")),
    responses(
        (status = 200, description = "Mensagem marcada como lida", body = Message),
        (status = 403, description = "Apenas o destinatário pode marcar")
    ),
    security(("api_jwt" = []))
)]
pub async fn mark_as_read(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Message>, AppError> {
    Ok(Json(app_state.message_service.mark_as_read(&user, id).await?))
}

#[utoipa::path(
    put,
    path = "/api/messages/conversation/{other_id}/read",
    tag = "Messages",
    params(("other_id" = Uuid, Path, description = "ID do outro usuário")),
    responses((status = 200, description = "Quantidade marcada como lida")),
    security(("api_jwt" = []))
)]
pub async fn mark_conversation_as_read(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(other_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let marked = app_state
        .message_service
        .mark_conversation_as_read(&user, other_id)
        .await?;
    Ok(Json(serde_json::json!({ "marked": marked })))
}

#[utoipa::path(
    get,
    path = "/api/messages/property/{property_id}",
    tag = "Messages",
    params(("property_id" = Uuid, Path, description = "ID da propriedade")),
    responses((status = 200, description = "Mensagens sobre a propriedade", body = Vec<Message>)),
    security(("api_jwt" = []))
)]
pub async fn by_property(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(property_id): Path<Uuid>,
) -> Result<Json<Vec<Message>>, AppError> {
    Ok(Json(app_state.message_service.by_property(property_id).await?))
}

// Busca por conteúdo nas conversas do usuário
#[utoipa::path(
    get,
    path = "/api/messages/search",
    tag = "Messages",
    params(SearchParams),
    responses((status = 200, description = "Mensagens encontradas", body = Vec<Message>)),
    security(("api_jwt" = []))
)]
pub async fn search(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Message>>, AppError> {
    Ok(Json(app_state.message_service.search(&user, &params.term).await?))
}

#[utoipa::path(
    delete,
    path = "/api/messages/{id}",
    tag = "Messages",
    params(("id" = Uuid, Path, description = "ID da mensagem")),
    responses(
        (status = 200, description = "Mensagem removida"),
        (status = 403, description = "Você não participa desta conversa")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    app_state.message_service.delete(&user, id).await?;
    Ok(Json(serde_json::json!({ "message": "Mensagem removida com sucesso." })))
}
