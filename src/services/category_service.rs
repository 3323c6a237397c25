// src/services/category_service.rs

use uuid::Uuid;

use crate::{common::error::AppError, db::CategoryRepository, models::category::Category};

#[derive(Clone)]
pub struct CategoryService {
    category_repo: CategoryRepository,
}

impl CategoryService {
    pub fn new(category_repo: CategoryRepository) -> Self {
        Self { category_repo }
    }

    pub async fn create(&self, name: &str, description: Option<&str>) -> Result<Category, AppError> {
        self.category_repo.create(name, description).await
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        self.category_repo.get_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Category, AppError> {
        self.category_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::CategoryNotFound)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        description: Option<&str>,
    ) -> Result<Category, AppError> {
        self.category_repo.update(id, name, description).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.category_repo.delete(id).await
    }
}
