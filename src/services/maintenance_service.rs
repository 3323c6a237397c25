// src/services/maintenance_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{MaintenanceRepository, PropertyRepository},
    models::auth::User,
    models::maintenance::{Maintenance, MaintenanceStatus},
};

#[derive(Clone)]
pub struct MaintenanceService {
    maintenance_repo: MaintenanceRepository,
    property_repo: PropertyRepository,
}

impl MaintenanceService {
    pub fn new(maintenance_repo: MaintenanceRepository, property_repo: PropertyRepository) -> Self {
        Self { maintenance_repo, property_repo }
    }

    pub async fn create(
        &self,
        actor: &User,
        property_id: Uuid,
        title: &str,
        description: Option<&str>,
        cost: Option<Decimal>,
    ) -> Result<Maintenance, AppError> {
        self.check_owner_or_admin(actor, property_id).await?;

        self.maintenance_repo
            .create(property_id, title, description, cost)
            .await
    }

    pub async fn get_by_property(
        &self,
        actor: &User,
        property_id: Uuid,
    ) -> Result<Vec<Maintenance>, AppError> {
        self.check_owner_or_admin(actor, property_id).await?;
        self.maintenance_repo.find_by_property(property_id).await
    }

    pub async fn update_status(
        &self,
        actor: &User,
        id: Uuid,
        status: MaintenanceStatus,
    ) -> Result<Maintenance, AppError> {
        let maintenance = self
            .maintenance_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::MaintenanceNotFound)?;

        self.check_owner_or_admin(actor, maintenance.property_id).await?;
        self.maintenance_repo.update_status(id, status).await
    }

    async fn check_owner_or_admin(&self, actor: &User, property_id: Uuid) -> Result<(), AppError> {
        let property = self
            .property_repo
            .find_by_id(property_id)
            .await?
            .ok_or(AppError::PropertyNotFound)?;

        if property.owner_id != actor.id && !actor.is_admin() {
            return Err(AppError::Forbidden(
                "Apenas o proprietário gerencia as manutenções desta propriedade.".to_string(),
            ));
        }
        Ok(())
    }
}
