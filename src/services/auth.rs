// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{Claims, User, UserRole},
};

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    jwt_secret: String,
    pool: PgPool,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, jwt_secret: String, pool: PgPool) -> Self {
        Self { user_repo, jwt_secret, pool }
    }

    pub async fn register_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone: Option<&str>,
    ) -> Result<String, AppError> {
        // Hashing em uma task bloqueante para não travar o runtime
        let password_clone = password.to_owned();
        let hashed_password =
            tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        // Username/e-mail duplicado vira 409 no repositório
        let new_user = self
            .user_repo
            .create_user(
                &self.pool,
                username,
                email,
                &hashed_password,
                UserRole::User,
                first_name,
                last_name,
                phone,
            )
            .await?;

        generate_token(&self.jwt_secret, new_user.id)
    }

    pub async fn login_user(&self, username: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        // Conta desativada não entra; a resposta não revela o motivo
        if !user.is_active {
            return Err(AppError::InvalidCredentials);
        }

        let password_clone = password.to_owned();
        let password_hash_clone = user.password_hash.clone();

        // Executa a verificação em um thread separado
        let is_password_valid =
            tokio::task::spawn_blocking(move || verify(&password_clone, &password_hash_clone))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        generate_token(&self.jwt_secret, user.id)
    }

    pub async fn validate_token(&self, token: &str) -> Result<User, AppError> {
        let user_id = decode_token(&self.jwt_secret, token)?;

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        if !user.is_active {
            return Err(AppError::InvalidToken);
        }

        Ok(user)
    }

    // Garante a conta admin na subida da aplicação
    pub async fn ensure_admin_user(&self) -> Result<(), AppError> {
        if self.user_repo.exists_by_username("admin").await? {
            tracing::info!("ℹ️ Usuário ADMIN já existe no banco de dados");
            return Ok(());
        }

        let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "adminpssw".to_string());
        let hashed = tokio::task::spawn_blocking(move || hash(&password, bcrypt::DEFAULT_COST))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        self.user_repo
            .create_user(
                &self.pool,
                "admin",
                "admin@rentmenow.com",
                &hashed,
                UserRole::Admin,
                Some("Administrador"),
                Some("RentMeNow"),
                None,
            )
            .await?;

        tracing::info!("✅ Usuário ADMIN criado");
        Ok(())
    }
}

fn generate_token(jwt_secret: &str, user_id: Uuid) -> Result<String, AppError> {
    let now = Utc::now();
    let expires_at = now + chrono::Duration::days(7);

    let claims = Claims {
        sub: user_id,
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )?)
}

fn decode_token(jwt_secret: &str, token: &str) -> Result<Uuid, AppError> {
    let validation = Validation::default();
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_ref()),
        &validation,
    )
    .map_err(|_| AppError::InvalidToken)?;

    Ok(token_data.claims.sub)
}

#[cfg(test)]
mod tests {
    use super::{decode_token, generate_token};
    use uuid::Uuid;

    #[test]
    fn token_gerado_e_validado_com_o_mesmo_segredo() {
        let user_id = Uuid::new_v4();
        let token = generate_token("segredo-de-teste", user_id).unwrap();
        let decoded = decode_token("segredo-de-teste", &token).unwrap();
        assert_eq!(decoded, user_id);
    }

    #[test]
    fn token_com_segredo_errado_e_rejeitado() {
        let token = generate_token("segredo-a", Uuid::new_v4()).unwrap();
        assert!(decode_token("segredo-b", &token).is_err());
    }

    #[test]
    fn token_adulterado_e_rejeitado() {
        let mut token = generate_token("segredo", Uuid::new_v4()).unwrap();
        token.push('x');
        assert!(decode_token("segredo", &token).is_err());
    }
}
