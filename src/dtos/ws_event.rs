//! WebSocket Event DTOs - Data Transfer Objects per eventi WebSocket

use serde::{Deserialize, Serialize};

use crate::dtos::{ChatMessageDTO, MessageStatusUpdateDTO};

/// Tagged union per eventi WebSocket
/// Serde serializza questo come:
/// { "type": "Message", "data": { ... } }
/// oppure
/// { "type": "MessageStatus", "data": { ... } }
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type", content = "data")]
pub enum WsEventDTO {
    Message(ChatMessageDTO),
    MessageStatus(MessageStatusUpdateDTO),
    Error { code: u16, message: String },
}
