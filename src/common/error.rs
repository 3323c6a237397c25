use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Username já existe")]
    UsernameAlreadyExists,

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Acesso negado: {0}")]
    Forbidden(String),

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Propriedade não encontrada")]
    PropertyNotFound,

    #[error("Contrato não encontrado")]
    RentalNotFound,

    #[error("Reserva não encontrada")]
    BookingNotFound,

    #[error("Mensagem não encontrada")]
    MessageNotFound,

    #[error("Categoria não encontrada")]
    CategoryNotFound,

    #[error("Manutenção não encontrada")]
    MaintenanceNotFound,

    // Violações de regra de negócio viram 400 com a mensagem da regra
    #[error("{0}")]
    InvalidOperation(String),

    #[error("Violação de chave única: {0}")]
    UniqueConstraintViolation(String),

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            AppError::UsernameAlreadyExists => {
                (StatusCode::CONFLICT, "Este username já está em uso.".to_string())
            }
            AppError::EmailAlreadyExists => {
                (StatusCode::CONFLICT, "Este e-mail já está em uso.".to_string())
            }
            AppError::UniqueConstraintViolation(ref c) => {
                (StatusCode::CONFLICT, format!("Registro duplicado ({c})."))
            }
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Username ou senha inválidos.".to_string())
            }
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Token de autenticação inválido ou ausente.".to_string(),
            ),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),

            AppError::UserNotFound
            | AppError::PropertyNotFound
            | AppError::RentalNotFound
            | AppError::BookingNotFound
            | AppError::MessageNotFound
            | AppError::CategoryNotFound
            | AppError::MaintenanceNotFound => (StatusCode::NOT_FOUND, self.to_string()),

            AppError::InvalidOperation(msg) => (StatusCode::BAD_REQUEST, msg),

            // Todos os outros erros viram 500; o `tracing` registra o detalhe.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn identidade_duplicada_vira_conflict() {
        assert_eq!(
            AppError::UsernameAlreadyExists.into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::EmailAlreadyExists.into_response().status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn nao_encontrado_vira_404() {
        assert_eq!(
            AppError::PropertyNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::RentalNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn regra_de_negocio_vira_400() {
        let err = AppError::InvalidOperation("Propriedade não está disponível.".into());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn credenciais_viram_401_e_forbidden_403() {
        assert_eq!(
            AppError::InvalidCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Forbidden("sem acesso".into()).into_response().status(),
            StatusCode::FORBIDDEN
        );
    }
}
