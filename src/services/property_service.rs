// src/services/property_service.rs

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{CategoryRepository, PropertyRepository, UserRepository},
    models::auth::User,
    models::property::Property,
};

#[derive(Clone)]
pub struct PropertyService {
    property_repo: PropertyRepository,
    category_repo: CategoryRepository,
    user_repo: UserRepository,
    pool: PgPool,
}

impl PropertyService {
    pub fn new(
        property_repo: PropertyRepository,
        category_repo: CategoryRepository,
        user_repo: UserRepository,
        pool: PgPool,
    ) -> Self {
        Self { property_repo, category_repo, user_repo, pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_property(
        &self,
        owner: &User,
        title: &str,
        description: Option<&str>,
        address: &str,
        city: &str,
        price: Decimal,
        bedrooms: i32,
        bathrooms: i32,
        category_name: Option<&str>,
    ) -> Result<Property, AppError> {
        if price <= Decimal::ZERO {
            return Err(AppError::InvalidOperation(
                "O preço deve ser positivo.".to_string(),
            ));
        }

        // Categoria é opcional, mas se informada precisa existir
        let category_id = match category_name {
            Some(name) => Some(
                self.category_repo
                    .find_by_name(name)
                    .await?
                    .ok_or(AppError::CategoryNotFound)?
                    .id,
            ),
            None => None,
        };

        self.property_repo
            .create(
                title,
                description,
                address,
                city,
                price,
                bedrooms,
                bathrooms,
                category_id,
                owner.id,
            )
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<Property>, AppError> {
        self.property_repo.get_all().await
    }

    pub async fn get_available(&self) -> Result<Vec<Property>, AppError> {
        self.property_repo.get_available().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Property, AppError> {
        self.property_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::PropertyNotFound)
    }

    pub async fn get_by_city(&self, city: &str) -> Result<Vec<Property>, AppError> {
        self.property_repo.find_by_city(city).await
    }

    pub async fn get_by_owner(&self, owner_id: Uuid) -> Result<Vec<Property>, AppError> {
        self.property_repo.find_by_owner(owner_id).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_property(
        &self,
        actor: &User,
        id: Uuid,
        title: &str,
        description: Option<&str>,
        address: &str,
        city: &str,
        price: Decimal,
        bedrooms: i32,
        bathrooms: i32,
        available: bool,
    ) -> Result<Property, AppError> {
        if price <= Decimal::ZERO {
            return Err(AppError::InvalidOperation(
                "O preço deve ser positivo.".to_string(),
            ));
        }

        self.check_owner_or_admin(actor, id).await?;

        self.property_repo
            .update(id, title, description, address, city, price, bedrooms, bathrooms, available)
            .await
    }

    pub async fn delete_property(&self, actor: &User, id: Uuid) -> Result<(), AppError> {
        self.check_owner_or_admin(actor, id).await?;
        self.property_repo.delete(id).await
    }

    // =========================================================================
    //  OPERAÇÕES EM LOTE (admin)
    // =========================================================================

    // Desconto percentual em todas as propriedades de uma cidade
    pub async fn apply_discount_to_city(
        &self,
        city: &str,
        discount_percentage: Decimal,
    ) -> Result<u64, AppError> {
        let factor = discount_factor(discount_percentage)?;

        let mut tx = self.pool.begin().await?;
        let updated = self
            .property_repo
            .scale_prices_by_city(&mut *tx, city, factor)
            .await?;
        tx.commit().await?;

        tracing::info!("💸 Desconto de {}% aplicado a {} propriedade(s) em {}",
            discount_percentage, updated, city);
        Ok(updated)
    }

    // Reajuste de inflação sobre todo o catálogo
    pub async fn apply_inflation_adjustment(
        &self,
        inflation_percentage: Decimal,
    ) -> Result<u64, AppError> {
        let factor = inflation_factor(inflation_percentage)?;

        let mut tx = self.pool.begin().await?;
        let updated = self.property_repo.scale_all_prices(&mut *tx, factor).await?;
        tx.commit().await?;

        Ok(updated)
    }

    pub async fn update_availability_by_owner(
        &self,
        owner_username: &str,
        available: bool,
    ) -> Result<u64, AppError> {
        let owner = self
            .user_repo
            .find_by_username(owner_username)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let mut tx = self.pool.begin().await?;
        let updated = self
            .property_repo
            .set_availability_by_owner(&mut *tx, owner.id, available)
            .await?;
        tx.commit().await?;

        Ok(updated)
    }

    async fn check_owner_or_admin(&self, actor: &User, property_id: Uuid) -> Result<(), AppError> {
        let property = self
            .property_repo
            .find_by_id(property_id)
            .await?
            .ok_or(AppError::PropertyNotFound)?;

        if property.owner_id != actor.id && !actor.is_admin() {
            return Err(AppError::Forbidden(
                "Apenas o proprietário pode alterar esta propriedade.".to_string(),
            ));
        }
        Ok(())
    }
}

// Fator multiplicativo de um desconto percentual (0 < pct < 100)
fn discount_factor(percentage: Decimal) -> Result<Decimal, AppError> {
    if percentage <= Decimal::ZERO || percentage >= Decimal::from(100) {
        return Err(AppError::InvalidOperation(
            "O desconto deve estar entre 0 e 100 por cento.".to_string(),
        ));
    }
    Ok(Decimal::ONE - percentage / Decimal::from(100))
}

// Fator multiplicativo de um reajuste percentual (pct > 0)
fn inflation_factor(percentage: Decimal) -> Result<Decimal, AppError> {
    if percentage <= Decimal::ZERO {
        return Err(AppError::InvalidOperation(
            "O percentual de reajuste deve ser positivo.".to_string(),
        ));
    }
    Ok(Decimal::ONE + percentage / Decimal::from(100))
}

#[cfg(test)]
mod tests {
    use super::{discount_factor, inflation_factor};
    use rust_decimal::Decimal;

    #[test]
    fn desconto_de_dez_por_cento_vira_fator_090() {
        let factor = discount_factor(Decimal::from(10)).unwrap();
        assert_eq!(factor, Decimal::new(90, 2));
    }

    #[test]
    fn desconto_fora_do_intervalo_e_rejeitado() {
        assert!(discount_factor(Decimal::ZERO).is_err());
        assert!(discount_factor(Decimal::from(100)).is_err());
        assert!(discount_factor(Decimal::from(-5)).is_err());
    }

    #[test]
    fn inflacao_de_cinco_por_cento_vira_fator_105() {
        let factor = inflation_factor(Decimal::from(5)).unwrap();
        assert_eq!(factor, Decimal::new(105, 2));
    }

    #[test]
    fn inflacao_nao_positiva_e_rejeitada() {
        assert!(inflation_factor(Decimal::ZERO).is_err());
        assert!(inflation_factor(Decimal::from(-3)).is_err());
    }
}
