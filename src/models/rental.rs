// src/models/rental.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "rental_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RentalStatus {
    Pending,
    Approved,
    Active,
    Rejected,
    Terminated,
    Expired,
}

impl RentalStatus {
    // Máquina de estados do contrato:
    // PENDING -> APPROVED | REJECTED
    // APPROVED -> ACTIVE | TERMINATED | EXPIRED
    // ACTIVE -> TERMINATED | EXPIRED
    // REJECTED / TERMINATED / EXPIRED são terminais
    pub fn can_transition_to(self, next: RentalStatus) -> bool {
        use RentalStatus::*;
        matches!(
            (self, next),
            (Pending, Approved)
                | (Pending, Rejected)
                | (Approved, Active)
                | (Approved, Terminated)
                | (Approved, Expired)
                | (Active, Terminated)
                | (Active, Expired)
        )
    }

    // Um contrato nestes estados bloqueia a propriedade para novos contratos
    pub fn is_occupying(self) -> bool {
        matches!(self, RentalStatus::Approved | RentalStatus::Active)
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RentalStatus::Rejected | RentalStatus::Terminated | RentalStatus::Expired
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: Uuid,
    pub property_id: Uuid,
    pub tenant_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub monthly_rent: Decimal,
    pub status: RentalStatus,
    pub request_message: Option<String>,
    pub response_message: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub rejected_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Visão de leitura com os campos denormalizados que o frontend consome
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RentalView {
    pub id: Uuid,
    pub property_id: Uuid,
    pub property_title: String,
    pub tenant_id: Uuid,
    pub tenant_username: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub monthly_rent: Decimal,
    pub status: RentalStatus,
    pub request_message: Option<String>,
    pub response_message: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub rejected_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::RentalStatus::*;

    #[test]
    fn pending_pode_ser_aprovado_ou_rejeitado() {
        assert!(Pending.can_transition_to(Approved));
        assert!(Pending.can_transition_to(Rejected));
        assert!(!Pending.can_transition_to(Terminated));
        assert!(!Pending.can_transition_to(Expired));
        assert!(!Pending.can_transition_to(Active));
    }

    #[test]
    fn contratos_ocupantes_podem_ser_finalizados() {
        assert!(Approved.can_transition_to(Terminated));
        assert!(Approved.can_transition_to(Expired));
        assert!(Active.can_transition_to(Terminated));
        assert!(Active.can_transition_to(Expired));
    }

    #[test]
    fn estados_terminais_nao_transicionam() {
        for terminal in [Rejected, Terminated, Expired] {
            assert!(terminal.is_terminal());
            for next in [Pending, Approved, Active, Rejected, Terminated, Expired] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn apenas_approved_e_active_ocupam() {
        assert!(Approved.is_occupying());
        assert!(Active.is_occupying());
        assert!(!Pending.is_occupying());
        assert!(!Rejected.is_occupying());
        assert!(!Terminated.is_occupying());
        assert!(!Expired.is_occupying());
    }

    #[test]
    fn aprovar_duas_vezes_e_invalido() {
        assert!(!Approved.can_transition_to(Approved));
        assert!(!Approved.can_transition_to(Rejected));
    }
}
