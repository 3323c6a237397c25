// src/services/user_service.rs

use uuid::Uuid;

use crate::{common::error::AppError, db::UserRepository, models::auth::User};

#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
}

impl UserService {
    pub fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        self.user_repo.get_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::UserNotFound)
    }

    pub async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        self.user_repo
            .find_by_username(username)
            .await?
            .ok_or(AppError::UserNotFound)
    }

    pub async fn update_profile(
        &self,
        id: Uuid,
        email: &str,
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone: Option<&str>,
        bio: Option<&str>,
    ) -> Result<User, AppError> {
        self.user_repo
            .update_profile(id, email, first_name, last_name, phone, bio)
            .await
    }

    // A exclusão de conta desativa o usuário; contratos e mensagens permanecem
    pub async fn deactivate(&self, id: Uuid) -> Result<(), AppError> {
        self.user_repo.deactivate(id).await
    }
}
