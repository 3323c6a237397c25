// src/handlers/admin.rs

use axum::{
    extract::{Path, Query, State},
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AdminUser,
    models::auth::User,
    models::property::Property,
    models::report::{FinancialReport, SystemStatistics},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminUpdateUserPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct DiscountParams {
    pub city: String,
    #[param(value_type = f64, example = 10.0)]
    pub discount: Decimal,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityParams {
    pub owner_username: String,
    pub available: bool,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct InflationParams {
    #[param(value_type = f64, example = 4.5)]
    pub percentage: Decimal,
}

// =========================================================================
//  USUÁRIOS
// =========================================================================

#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "Admin",
    responses((status = 200, description = "Todos os usuários", body = Vec<User>)),
    security(("api_jwt" = []))
)]
pub async fn get_all_users(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(app_state.user_service.get_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/admin/users/{id}",
    tag = "Admin",
    params(("id" = Uuid, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário", body = User),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_user_by_id(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    Ok(Json(app_state.user_service.get_by_id(id).await?))
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{id}",
    tag = "Admin",
    params(("id" = Uuid, Path, description = "ID do usuário")),
    request_body = AdminUpdateUserPayload,
    responses((status = 200, description = "Usuário atualizado", body = User)),
    security(("api_jwt" = []))
)]
pub async fn update_user(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<AdminUpdateUserPayload>,
) -> Result<Json<User>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let user = app_state
        .user_service
        .update_profile(
            id,
            &payload.email,
            payload.first_name.as_deref(),
            payload.last_name.as_deref(),
            payload.phone.as_deref(),
            payload.bio.as_deref(),
        )
        .await?;

    Ok(Json(user))
}

// Desativa a conta; contratos e mensagens permanecem no histórico
#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    tag = "Admin",
    params(("id" = Uuid, Path, description = "ID do usuário")),
    responses((status = 200, description = "Usuário desativado")),
    security(("api_jwt" = []))
)]
pub async fn delete_user(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    app_state.user_service.deactivate(id).await?;
    Ok(Json(serde_json::json!({ "message": "Usuário desativado com sucesso." })))
}

// =========================================================================
//  PROPRIEDADES
// =========================================================================

#[utoipa::path(
    get,
    path = "/api/admin/properties",
    tag = "Admin",
    responses((status = 200, description = "Todas as propriedades", body = Vec<Property>)),
    security(("api_jwt" = []))
)]
pub async fn get_all_properties(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<Vec<Property>>, AppError> {
    Ok(Json(app_state.property_service.get_all().await?))
}

#[utoipa::path(
    delete,
    path = "/api/admin/properties/{id}",
    tag = "Admin",
    params(("id" = Uuid, Path, description = "ID da propriedade")),
    responses((status = 200, description = "Propriedade removida")),
    security(("api_jwt" = []))
)]
pub async fn delete_property(
    State(app_state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    app_state.property_service.delete_property(&admin, id).await?;
    Ok(Json(serde_json::json!({ "message": "Propriedade removida com sucesso." })))
}

// =========================================================================
//  OPERAÇÕES EM LOTE
// =========================================================================

#[utoipa::path(
    post,
    path = "/api/admin/operations/discount-by-city",
    tag = "Admin",
    params(DiscountParams),
    responses(
        (status = 200, description = "Desconto aplicado"),
        (status = 400, description = "Percentual fora do intervalo")
    ),
    security(("api_jwt" = []))
)]
pub async fn apply_discount_to_city(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Query(params): Query<DiscountParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let updated = app_state
        .property_service
        .apply_discount_to_city(&params.city, params.discount)
        .await?;

    Ok(Json(serde_json::json!({
        "message": format!("Desconto aplicado a {updated} propriedade(s) em {}.", params.city),
        "updated": updated,
    })))
}

#[utoipa::path(
    post,
    path = "/api/admin/operations/update-availability",
    tag = "Admin",
    params(AvailabilityParams),
    responses((status = 200, description = "Disponibilidade atualizada")),
    security(("api_jwt" = []))
)]
pub async fn update_availability_by_owner(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Query(params): Query<AvailabilityParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let updated = app_state
        .property_service
        .update_availability_by_owner(&params.owner_username, params.available)
        .await?;

    Ok(Json(serde_json::json!({
        "message": format!("{updated} propriedade(s) atualizadas."),
        "updated": updated,
    })))
}

#[utoipa::path(
    post,
    path = "/api/admin/operations/inflation-adjustment",
    tag = "Admin",
    params(InflationParams),
    responses((status = 200, description = "Reajuste aplicado")),
    security(("api_jwt" = []))
)]
pub async fn apply_inflation_adjustment(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Query(params): Query<InflationParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let updated = app_state
        .property_service
        .apply_inflation_adjustment(params.percentage)
        .await?;

    Ok(Json(serde_json::json!({
        "message": format!("Reajuste aplicado a {updated} propriedade(s)."),
        "updated": updated,
    })))
}

#[utoipa::path(
    post,
    path = "/api/admin/operations/finalize-expired-rentals",
    tag = "Admin",
    responses((status = 200, description = "Contratos vencidos finalizados")),
    security(("api_jwt" = []))
)]
pub async fn finalize_expired_rentals(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<serde_json::Value>, AppError> {
    let finalized = app_state.rental_service.finalize_expired().await?;
    Ok(Json(serde_json::json!({
        "message": "Contratos vencidos finalizados com sucesso.",
        "finalized": finalized,
    })))
}

// =========================================================================
//  RELATÓRIOS
// =========================================================================

#[utoipa::path(
    get,
    path = "/api/admin/reports/financial",
    tag = "Admin",
    responses((status = 200, description = "Relatório financeiro", body = FinancialReport)),
    security(("api_jwt" = []))
)]
pub async fn financial_report(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<FinancialReport>, AppError> {
    Ok(Json(app_state.report_service.financial_report().await?))
}

#[utoipa::path(
    get,
    path = "/api/admin/statistics",
    tag = "Admin",
    responses((status = 200, description = "Estatísticas do sistema", body = SystemStatistics)),
    security(("api_jwt" = []))
)]
pub async fn system_statistics(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<SystemStatistics>, AppError> {
    Ok(Json(app_state.report_service.system_statistics().await?))
}
