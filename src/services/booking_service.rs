// src/services/booking_service.rs

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{BookingRepository, PropertyRepository},
    models::auth::User,
    models::booking::{Booking, BookingStatus, BookingStatusCount},
};

#[derive(Clone)]
pub struct BookingService {
    booking_repo: BookingRepository,
    property_repo: PropertyRepository,
}

impl BookingService {
    pub fn new(booking_repo: BookingRepository, property_repo: PropertyRepository) -> Self {
        Self { booking_repo, property_repo }
    }

    // Visitante anônimo precisa informar nome e e-mail de contato;
    // usuário logado herda os dados do perfil quando não os informa.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_booking(
        &self,
        user: Option<&User>,
        property_id: Uuid,
        contact_name: Option<&str>,
        contact_email: Option<&str>,
        contact_phone: Option<&str>,
        message: Option<&str>,
        preferred_visit_date: Option<DateTime<Utc>>,
    ) -> Result<Booking, AppError> {
        self.property_repo
            .find_by_id(property_id)
            .await?
            .ok_or(AppError::PropertyNotFound)?;

        let (name, email, phone) = resolve_contact(user, contact_name, contact_email, contact_phone)?;

        self.booking_repo
            .create(
                property_id,
                user.map(|u| u.id),
                &name,
                &email,
                phone.as_deref(),
                message,
                preferred_visit_date,
            )
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<Booking>, AppError> {
        self.booking_repo.get_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Booking, AppError> {
        self.booking_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::BookingNotFound)
    }

    pub async fn get_by_property(&self, property_id: Uuid) -> Result<Vec<Booking>, AppError> {
        self.booking_repo.find_by_property(property_id).await
    }

    pub async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, AppError> {
        self.booking_repo.find_by_user(user_id).await
    }

    pub async fn get_by_property_owner(&self, owner_id: Uuid) -> Result<Vec<Booking>, AppError> {
        self.booking_repo.find_by_property_owner(owner_id).await
    }

    pub async fn get_by_status(&self, status: BookingStatus) -> Result<Vec<Booking>, AppError> {
        self.booking_repo.find_by_status(status).await
    }

    pub async fn get_pending(&self) -> Result<Vec<Booking>, AppError> {
        self.booking_repo.find_by_status(BookingStatus::Pending).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_booking(
        &self,
        id: Uuid,
        contact_name: &str,
        contact_email: &str,
        contact_phone: Option<&str>,
        message: Option<&str>,
        status: BookingStatus,
        preferred_visit_date: Option<DateTime<Utc>>,
    ) -> Result<Booking, AppError> {
        self.booking_repo
            .update(id, contact_name, contact_email, contact_phone, message, status, preferred_visit_date)
            .await
    }

    pub async fn update_status(&self, id: Uuid, status: BookingStatus) -> Result<Booking, AppError> {
        self.booking_repo.update_status(id, status).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.booking_repo.delete(id).await
    }

    pub async fn count_by_status(&self) -> Result<Vec<BookingStatusCount>, AppError> {
        self.booking_repo.count_by_status().await
    }
}

// Resolve os dados de contato da reserva: o usuário logado herda do perfil
// o que não informar; o visitante precisa informar nome e e-mail.
fn resolve_contact(
    user: Option<&User>,
    contact_name: Option<&str>,
    contact_email: Option<&str>,
    contact_phone: Option<&str>,
) -> Result<(String, String, Option<String>), AppError> {
    match user {
        Some(u) => {
            let full_name = match (&u.first_name, &u.last_name) {
                (Some(f), Some(l)) => format!("{f} {l}"),
                (Some(f), None) => f.clone(),
                _ => u.username.clone(),
            };
            Ok((
                contact_name.map(str::to_owned).unwrap_or(full_name),
                contact_email.map(str::to_owned).unwrap_or_else(|| u.email.clone()),
                contact_phone.map(str::to_owned).or_else(|| u.phone.clone()),
            ))
        }
        None => {
            let name = contact_name.ok_or_else(|| {
                AppError::InvalidOperation("O nome de contato é obrigatório.".to_string())
            })?;
            let email = contact_email.ok_or_else(|| {
                AppError::InvalidOperation("O e-mail de contato é obrigatório.".to_string())
            })?;
            Ok((name.to_owned(), email.to_owned(), contact_phone.map(str::to_owned)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_contact;
    use crate::models::auth::{User, UserRole};
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "maria".to_string(),
            email: "maria@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::User,
            first_name: Some("Maria".to_string()),
            last_name: Some("Silva".to_string()),
            phone: Some("+34 600 111 222".to_string()),
            bio: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn usuario_logado_herda_os_dados_do_perfil() {
        let user = sample_user();
        let (name, email, phone) = resolve_contact(Some(&user), None, None, None).unwrap();
        assert_eq!(name, "Maria Silva");
        assert_eq!(email, "maria@example.com");
        assert_eq!(phone.as_deref(), Some("+34 600 111 222"));
    }

    #[test]
    fn contato_explicito_tem_precedencia_sobre_o_perfil() {
        let user = sample_user();
        let (name, email, _) =
            resolve_contact(Some(&user), Some("Outra Pessoa"), Some("outra@example.com"), None)
                .unwrap();
        assert_eq!(name, "Outra Pessoa");
        assert_eq!(email, "outra@example.com");
    }

    #[test]
    fn visitante_sem_contato_e_rejeitado() {
        assert!(resolve_contact(None, None, Some("x@example.com"), None).is_err());
        assert!(resolve_contact(None, Some("Fulano"), None, None).is_err());
    }

    #[test]
    fn usuario_sem_nome_no_perfil_usa_o_username() {
        let mut user = sample_user();
        user.first_name = None;
        user.last_name = None;
        let (name, _, _) = resolve_contact(Some(&user), None, None, None).unwrap();
        assert_eq!(name, "maria");
    }
}
