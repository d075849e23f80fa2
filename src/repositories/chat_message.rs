//! ChatMessageRepository - Repository per i messaggi di chat punto-punto

use super::Create;
use crate::dtos::CreateChatMessageDTO;
use crate::entities::{ChatMessage, MessageStatus, conversation_id};
use chrono::{DateTime, Utc};
use sqlx::{Error, SqlitePool};

// MESSAGE REPO
pub struct ChatMessageRepository {
    connection_pool: SqlitePool,
}

impl ChatMessageRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Tutti i messaggi tra a e b, in entrambe le direzioni.
    /// Ordine stabile: timestamp crescente, a parità di timestamp l'id.
    pub async fn find_conversation(&self, a: i64, b: i64) -> Result<Vec<ChatMessage>, Error> {
        sqlx::query_as::<_, ChatMessage>(
            r#"
            SELECT * FROM chat_messages
            WHERE conversation_id = ?
            ORDER BY timestamp ASC, id ASC
            "#,
        )
        .bind(conversation_id(a, b))
        .fetch_all(&self.connection_pool)
        .await
    }

    /// SENT -> DELIVERED in una sola istruzione condizionale.
    /// Ritorna `None` se il messaggio non esiste, il destinatario non coincide
    /// o lo stato non è esattamente SENT.
    pub async fn mark_delivered(
        &self,
        message_id: i64,
        receiver_id: i64,
        at: DateTime<Utc>,
    ) -> Result<Option<ChatMessage>, Error> {
        sqlx::query_as::<_, ChatMessage>(
            r#"
            UPDATE chat_messages
            SET status = 'DELIVERED', delivered_at = ?
            WHERE id = ? AND receiver_id = ? AND status = 'SENT'
            RETURNING *
            "#,
        )
        .bind(at)
        .bind(message_id)
        .bind(receiver_id)
        .fetch_optional(&self.connection_pool)
        .await
    }

    /// SENT -> READ per tutti i messaggi della coppia orientata sender -> receiver.
    /// Ritorna solo le righe effettivamente transitate.
    pub async fn mark_read(
        &self,
        sender_id: i64,
        receiver_id: i64,
        at: DateTime<Utc>,
    ) -> Result<Vec<ChatMessage>, Error> {
        sqlx::query_as::<_, ChatMessage>(
            r#"
            UPDATE chat_messages
            SET status = 'READ', read_at = ?
            WHERE sender_id = ? AND receiver_id = ? AND status = 'SENT'
            RETURNING *
            "#,
        )
        .bind(at)
        .bind(sender_id)
        .bind(receiver_id)
        .fetch_all(&self.connection_pool)
        .await
    }

    pub async fn count_unread(&self, receiver_id: i64) -> Result<i64, Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM chat_messages WHERE receiver_id = ? AND status = 'SENT'",
        )
        .bind(receiver_id)
        .fetch_one(&self.connection_pool)
        .await
    }
}

impl Create<ChatMessage, CreateChatMessageDTO> for ChatMessageRepository {
    async fn create(&self, data: &CreateChatMessageDTO) -> Result<ChatMessage, Error> {
        sqlx::query_as::<_, ChatMessage>(
            r#"
            INSERT INTO chat_messages (sender_id, receiver_id, content, timestamp, status, conversation_id)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(data.sender_id)
        .bind(data.receiver_id)
        .bind(&data.content)
        .bind(data.timestamp.unwrap_or_else(Utc::now))
        .bind(data.status.unwrap_or(MessageStatus::Sent))
        .bind(conversation_id(data.sender_id, data.receiver_id))
        .fetch_one(&self.connection_pool)
        .await
    }
}
