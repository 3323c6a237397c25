// src/services/payment_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{PaymentRepository, PropertyRepository, RentalRepository},
    models::auth::User,
    models::payment::{Payment, PaymentStatus},
};

#[derive(Clone)]
pub struct PaymentService {
    payment_repo: PaymentRepository,
    rental_repo: RentalRepository,
    property_repo: PropertyRepository,
}

impl PaymentService {
    pub fn new(
        payment_repo: PaymentRepository,
        rental_repo: RentalRepository,
        property_repo: PropertyRepository,
    ) -> Self {
        Self { payment_repo, rental_repo, property_repo }
    }

    pub async fn record_payment(
        &self,
        actor: &User,
        rental_id: Uuid,
        amount: Decimal,
        payment_date: NaiveDate,
        status: PaymentStatus,
        notes: Option<&str>,
    ) -> Result<Payment, AppError> {
        if amount <= Decimal::ZERO {
            return Err(AppError::InvalidOperation(
                "O valor do pagamento deve ser positivo.".to_string(),
            ));
        }

        self.check_party(actor, rental_id).await?;

        self.payment_repo
            .create(rental_id, amount, payment_date, status, notes)
            .await
    }

    pub async fn list_payments(&self, actor: &User, rental_id: Uuid) -> Result<Vec<Payment>, AppError> {
        self.check_party(actor, rental_id).await?;
        self.payment_repo.find_by_rental(rental_id).await
    }

    // Pagamentos são visíveis às partes do contrato e ao admin
    async fn check_party(&self, actor: &User, rental_id: Uuid) -> Result<(), AppError> {
        let rental = self
            .rental_repo
            .find_by_id(rental_id)
            .await?
            .ok_or(AppError::RentalNotFound)?;

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
