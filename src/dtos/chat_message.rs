//! ChatMessage DTOs - Data Transfer Objects per i messaggi

use crate::entities::{ChatMessage, MessageStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MAX_CONTENT_LEN: u64 = 5000;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageDTO {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub status: MessageStatus,
    pub conversation_id: String,
    pub delivered_at: Option<DateTime<Utc>>,
    pub read_at: Option<DateTime<Utc>>,
}

impl From<ChatMessage> for ChatMessageDTO {
    fn from(value: ChatMessage) -> Self {
        Self {
            id: value.id,
            sender_id: value.sender_id,
            receiver_id: value.receiver_id,
            content: value.content,
            timestamp: value.timestamp,
            status: value.status,
            conversation_id: value.conversation_id,
            delivered_at: value.delivered_at,
            read_at: value.read_at,
        }
    }
}

/// Messaggio in ingresso, da REST o da frame WebSocket.
/// `senderId` è opzionale: il mittente è sempre l'utente autenticato.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageDTO {
    pub sender_id: Option<i64>,
    pub receiver_id: i64,
    #[validate(length(
        min = 1,
        max = 5000,
        message = "Message content must be between 1 and 5000 characters"
    ))]
    pub content: String,
}

/// DTO per creare un nuovo messaggio (senza id)
#[derive(Debug, Clone)]
pub struct CreateChatMessageDTO {
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub status: Option<MessageStatus>,
}

impl CreateChatMessageDTO {
    pub fn new(sender_id: i64, receiver_id: i64, content: impl Into<String>) -> Self {
        Self {
            sender_id,
            receiver_id,
            content: content.into(),
            timestamp: None,
            status: None,
        }
    }
}

/// Notifica di cambio stato inviata al mittente
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MessageStatusUpdateDTO {
    pub message_id: i64,
    pub status: MessageStatus,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCountDTO {
    pub count: i64,
}
