// src/services/rental_service.rs

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{PropertyRepository, RentalRepository},
    models::auth::User,
    models::rental::{Rental, RentalStatus, RentalView},
};

// Mensagem gravada nos pedidos perdedores quando outro é aprovado
const AUTO_REJECT_MESSAGE: &str =
    "Pedido rejeitado automaticamente: a propriedade foi alugada para outro inquilino.";

#[derive(Clone)]
pub struct RentalService {
    rental_repo: RentalRepository,
    property_repo: PropertyRepository,
    pool: PgPool,
}

impl RentalService {
    pub fn new(
        rental_repo: RentalRepository,
        property_repo: PropertyRepository,
        pool: PgPool,
    ) -> Self {
        Self { rental_repo, property_repo, pool }
    }

    // --- CRIAR PEDIDO ---
    pub async fn create_request(
        &self,
        tenant: &User,
        property_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        monthly_rent: Decimal,
        request_message: Option<&str>,
    ) -> Result<Rental, AppError> {
        if start_date >= end_date {
            return Err(AppError::InvalidOperation(
                "A data de início deve ser anterior à data de término.".to_string(),
            ));
        }

        let property = self
            .property_repo
            .find_by_id(property_id)
            .await?
            .ok_or(AppError::PropertyNotFound)?;

        if property.owner_id == tenant.id {
            return Err(AppError::InvalidOperation(
                "Você não pode alugar sua própria propriedade.".to_string(),
            ));
        }

        if !property.available {
            return Err(AppError::InvalidOperation(
                "Propriedade não está disponível.".to_string(),
            ));
        }

        // O pedido nasce PENDING; a propriedade só é ocupada na aprovação
        self.rental_repo
            .create(
                &self.pool,
                property_id,
                tenant.id,
                start_date,
                end_date,
                monthly_rent,
                request_message,
            )
            .await
    }

    // --- APROVAR ---
    // Tudo dentro de uma transação com a linha da propriedade travada:
    // quem chegar segundo espera e encontra a propriedade já ocupada.
    pub async fn approve(
        &self,
        actor: &User,
        rental_id: Uuid,
        response_message: Option<&str>,
    ) -> Result<Rental, AppError> {
        let mut tx = self.pool.begin().await?;

        let rental = self
            .rental_repo
            .find_by_id_for_update(&mut *tx, rental_id)
            .await?
            .ok_or(AppError::RentalNotFound)?;

        let property = self
            .property_repo
            .find_by_id_for_update(&mut *tx, rental.property_id)
            .await?
            .ok_or(AppError::PropertyNotFound)?;

        if property.owner_id != actor.id && !actor.is_admin() {
            return Err(AppError::Forbidden(
                "Apenas o proprietário pode aprovar pedidos desta propriedade.".to_string(),
            ));
        }

        if !rental.status.can_transition_to(RentalStatus::Approved) {
            return Err(AppError::InvalidOperation(
                "Apenas pedidos pendentes podem ser aprovados.".to_string(),
            ));
        }

        // Revalida sob o lock: fecha a corrida de dupla aprovação
        if !property.available {
            return Err(AppError::InvalidOperation(
                "Propriedade não está disponível.".to_string(),
            ));
        }

        let approved = self
            .rental_repo
            .approve(&mut *tx, rental_id, response_message)
            .await?;

        let losers = self
            .rental_repo
            .reject_competing_pending(&mut *tx, rental.property_id, rental_id, AUTO_REJECT_MESSAGE)
            .await?;

        self.property_repo
            .set_availability(&mut *tx, rental.property_id, false, Some(rental.end_date))
            .await?;

        tx.commit().await?;

        if losers > 0 {
            tracing::info!(
                "Aprovação do contrato {} rejeitou {} pedido(s) concorrente(s)",
                rental_id,
                losers
            );
        }

        Ok(approved)
    }

    // --- REJEITAR ---
    pub async fn reject(
        &self,
        actor: &User,
        rental_id: Uuid,
        response_message: Option<&str>,
    ) -> Result<Rental, AppError> {
        let mut tx = self.pool.begin().await?;

        let rental = self
            .rental_repo
            .find_by_id_for_update(&mut *tx, rental_id)
            .await?
            .ok_or(AppError::RentalNotFound)?;

        let property = self
            .property_repo
            .find_by_id(rental.property_id)
            .await?
            .ok_or(AppError::PropertyNotFound)?;

        if property.owner_id != actor.id && !actor.is_admin() {
            return Err(AppError::Forbidden(
                "Apenas o proprietário pode rejeitar pedidos desta propriedade.".to_string(),
            ));
        }

        if !rental.status.can_transition_to(RentalStatus::Rejected) {
            return Err(AppError::InvalidOperation(
                "Apenas pedidos pendentes podem ser rejeitados.".to_string(),
            ));
        }

        let rejected = self
            .rental_repo
            .reject(&mut *tx, rental_id, response_message)
            .await?;

        tx.commit().await?;
        Ok(rejected)
    }

    // --- LEITURAS ---

    pub async fn get_all(&self) -> Result<Vec<RentalView>, AppError> {
        self.rental_repo.get_all_views().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<RentalView, AppError> {
        self.rental_repo
            .find_view_by_id(id)
            .await?
            .ok_or(AppError::RentalNotFound)
    }

    pub async fn my_requests(&self, tenant_id: Uuid) -> Result<Vec<RentalView>, AppError> {
        self.rental_repo.views_by_tenant(tenant_id).await
    }

    pub async fn property_requests(&self, owner_id: Uuid) -> Result<Vec<RentalView>, AppError> {
        self.rental_repo.views_by_property_owner(owner_id).await
    }

    // --- ATUALIZAR TERMOS ---
    pub async fn update_terms(
        &self,
        actor: &User,
        rental_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        monthly_rent: Decimal,
    ) -> Result<Rental, AppError> {
        if start_date >= end_date {
            return Err(AppError::InvalidOperation(
                "A data de início deve ser anterior à data de término.".to_string(),
            ));
        }

        let rental = self
            .rental_repo
            .find_by_id(rental_id)
            .await?
            .ok_or(AppError::RentalNotFound)?;

        self.check_party(actor, &rental).await?;

        if rental.status.is_terminal() {
            return Err(AppError::InvalidOperation(
                "Contrato encerrado não pode ser alterado.".to_string(),
            ));
        }

        self.rental_repo
            .update_terms(rental_id, start_date, end_date, monthly_rent)
            .await
    }

    // --- EXCLUIR ---
    // Excluir um contrato ocupante devolve a propriedade
    pub async fn delete(&self, actor: &User, rental_id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let rental = self
            .rental_repo
            .find_by_id_for_update(&mut *tx, rental_id)
            .await?
            .ok_or(AppError::RentalNotFound)?;

        self.check_party(actor, &rental).await?;

        if rental.status.is_occupying() {
            self.property_repo
                .set_availability(&mut *tx, rental.property_id, true, None)
                .await?;
        }

        self.rental_repo.delete(&mut *tx, rental_id).await?;

        tx.commit().await?;
        Ok(())
    }

    // --- SWEEP DE EXPIRADOS ---
    // Termina todos os contratos ocupantes vencidos e libera as propriedades.
    pub async fn finalize_expired(&self) -> Result<u64, AppError> {
        let today = Utc::now().date_naive();

        let mut tx = self.pool.begin().await?;

        let freed_properties = self.rental_repo.terminate_expired(&mut *tx, today).await?;

        // O índice parcial garante no máximo um contrato ocupante por
        // propriedade, então a lista não tem duplicatas.
        for property_id in &freed_properties {
            self.property_repo
                .set_availability(&mut *tx, *property_id, true, None)
                .await?;
        }

        tx.commit().await?;

        let count = freed_properties.len() as u64;
        if count > 0 {
            tracing::info!("🧹 Sweep finalizou {} contrato(s) vencido(s)", count);
        }

        Ok(count)
    }

    // Inquilino, proprietário ou admin
    async fn check_party(&self, actor: &User, rental: &Rental) -> Result<(), AppError> {
        if actor.is_admin() || rental.tenant_id == actor.id {
            return Ok(());
        }

        let property = self
            .property_repo
            .find_by_id(rental.property_id)
            .await?
            .ok_or(AppError::PropertyNotFound)?;

        if property.owner_id == actor.id {
            return Ok(());
        }

        Err(AppError::Forbidden(
            "Você não participa deste contrato.".to_string(),
        ))
    }
}
