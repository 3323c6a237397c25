// src/services/message_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{MessageRepository, PropertyRepository, UserRepository},
    models::auth::User,
    models::message::Message,
};

#[derive(Clone)]
pub struct MessageService {
    message_repo: MessageRepository,
    user_repo: UserRepository,
    property_repo: PropertyRepository,
}

impl MessageService {
    pub fn new(
        message_repo: MessageRepository,
        user_repo: UserRepository,
        property_repo: PropertyRepository,
    ) -> Self {
        Self { message_repo, user_repo, property_repo }
    }

    pub async fn send(
        &self,
        sender: &User,
        receiver_id: Uuid,
        property_id: Option<Uuid>,
        content: &str,
    ) -> Result<Message, AppError> {
        if receiver_id == sender.id {
            return Err(AppError::InvalidOperation(
                "Você não pode enviar uma mensagem para si mesmo.".to_string(),
            ));
        }

        self.user_repo
            .find_by_id(receiver_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        if let Some(pid) = property_id {
            self.property_repo
                .find_by_id(pid)
                .await?
                .ok_or(AppError::PropertyNotFound)?;
        }

        self.message_repo
            .create(sender.id, receiver_id, property_id, content)
            .await
    }

    pub async fn conversation(&self, user: &User, other_id: Uuid) -> Result<Vec<Message>, AppError> {
        self.message_repo.conversation(user.id, other_id).await
    }

    pub async fn sent_by(&self, user: &User) -> Result<Vec<Message>, AppError> {
        self.message_repo.find_by_sender(user.id).await
    }

    pub async fn received_by(&self, user: &User) -> Result<Vec<Message>, AppError> {
        self.message_repo.find_by_receiver(user.id).await
    }

    pub async fn unread(&self, user: &User) -> Result<Vec<Message>, AppError> {
        self.message_repo.find_unread(user.id).await
    }

    pub async fn by_property(&self, property_id: Uuid) -> Result<Vec<Message>, AppError> {
        self.message_repo.find_by_property(property_id).await
    }

    // Somente o destinatário marca como lida
    pub async fn mark_as_read(&self, user: &User, message_id: Uuid) -> Result<Message, AppError> {
        let message = self
            .message_repo
            .find_by_id(message_id)
            .await?
            .ok_or(AppError::MessageNotFound)?;

        if message.receiver_id != user.id {
            return Err(AppError::Forbidden(
                "Apenas o destinatário pode marcar a mensagem como lida.".to_string(),
            ));
        }

        self.message_repo.mark_as_read(message_id).await
    }

    pub async fn mark_conversation_as_read(
        &self,
        user: &User,
        other_id: Uuid,
    ) -> Result<u64, AppError> {
        self.message_repo
            .mark_conversation_as_read(user.id, other_id, user.id)
            .await
    }

    pub async fn count_unread(&self, user: &User) -> Result<i64, AppError> {
        self.message_repo.count_unread(user.id).await
    }

    pub async fn search(&self, user: &User, term: &str) -> Result<Vec<Message>, AppError> {
        self.message_repo.search(term, user.id).await
    }

    // Remetente, destinatário ou admin podem apagar
    pub async fn delete(&self, user: &User, message_id: Uuid) -> Result<(), AppError> {
        let message = self
            .message_repo
            .find_by_id(message_id)
            .await?
            .ok_or(AppError::MessageNotFound)?;

        if message.sender_id != user.id && message.receiver_id != user.id && !user.is_admin() {
            return Err(AppError::Forbidden(
                "Você não participa desta conversa.".to_string(),
            ));
        }

        self.message_repo.delete(message_id).await
    }
}
