//! ChatMessage entity - Messaggio punto-punto tra due utenti

use super::enums::MessageStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct ChatMessage {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub status: MessageStatus,
    // stesso valore per entrambe le direzioni del dialogo
    pub conversation_id: String,
    pub delivered_at: Option<DateTime<Utc>>,
    pub read_at: Option<DateTime<Utc>>,
}

/// Conversation bucket for the unordered pair {a, b}: the two ids sorted ascending, joined by `_`
pub fn conversation_id(a: i64, b: i64) -> String {
    format!("{}_{}", a.min(b), a.max(b))
}
