// src/db/message_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::message::Message};

#[derive(Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        property_id: Option<Uuid>,
        content: &str,
    ) -> Result<Message, AppError> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (sender_id, receiver_id, property_id, content)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(sender_id)
        .bind(receiver_id)
        .bind(property_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, AppError> {
        let message = sqlx::query_as::<_, Message>("SELECT * FROM messages WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(message)
    }

    // Conversa completa entre dois usuários, em ordem cronológica
    pub async fn conversation(&self, user_a: Uuid, user_b: Uuid) -> Result<Vec<Message>, AppError> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT * FROM messages
            WHERE (sender_id = $1 AND receiver_id = $2)
               OR (sender_id = $2 AND receiver_id = $1)
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_a)
        .bind(user_b)
        .fetch_all(&self.pool)
        .await?;
        Ok(messages)
    }

    pub async fn find_by_sender(&self, sender_id: Uuid) -> Result<Vec<Message>, AppError> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT * FROM messages WHERE sender_id = $1 ORDER BY created_at DESC",
        )
        .bind(sender_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(messages)
    }

    pub async fn find_by_receiver(&self, receiver_id: Uuid) -> Result<Vec<Message>, AppError> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT * FROM messages WHERE receiver_id = $1 ORDER BY created_at DESC",
        )
        .bind(receiver_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(messages)
    }

    pub async fn find_unread(&self, receiver_id: Uuid) -> Result<Vec<Message>, AppError> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT * FROM messages WHERE receiver_id = $1 AND is_read = FALSE ORDER BY created_at ASC",
        )
        .bind(receiver_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(messages)
    }

    pub async fn find_by_property(&self, property_id: Uuid) -> Result<Vec<Message>, AppError> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT * FROM messages WHERE property_id = $1 ORDER BY created_at ASC",
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(messages)
    }

    pub async fn mark_as_read(&self, id: Uuid) -> Result<Message, AppError> {
        sqlx::query_as::<_, Message>(
            "UPDATE messages SET is_read = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::MessageNotFound)
    }

    // Marca como lidos todos os recebidos pelo `receiver_id` dentro da conversa
    pub async fn mark_conversation_as_read(
        &self,
        user_a: Uuid,
        user_b: Uuid,
        receiver_id: Uuid,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE messages
            SET is_read = TRUE
            WHERE ((sender_id = $1 AND receiver_id = $2) OR (sender_id = $2 AND receiver_id = $1))
              AND receiver_id = $3 AND is_read = FALSE
            "#,
        )
        .bind(user_a)
        .bind(user_b)
        .bind(receiver_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn count_unread(&self, receiver_id: Uuid) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM messages WHERE receiver_id = $1 AND is_read = FALSE",
        )
        .bind(receiver_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    // Busca por conteúdo entre as mensagens que o usuário enviou ou recebeu
    pub async fn search(&self, term: &str, user_id: Uuid) -> Result<Vec<Message>, AppError> {
        let pattern = format!("%{term}%");
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT * FROM messages
            WHERE content ILIKE $1 AND (sender_id = $2 OR receiver_id = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(pattern)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(messages)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::MessageNotFound);
        }
        Ok(())
    }
}
