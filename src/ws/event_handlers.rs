//! WebSocket Event Handlers - Frame in ingresso dal client

use crate::AppState;
use crate::dtos::{SendMessageDTO, WsEventDTO};
use crate::services::chat::process_message;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Un frame testuale è un `SendMessageDTO`. Il mittente è sempre l'utente della sessione:
/// un `senderId` diverso viene rifiutato.
/// L'errore ritornato è l'evento da mandare indietro alla sola sessione.
#[instrument(skip(state, text))]
pub async fn handle_text_frame(
    state: &Arc<AppState>,
    user_id: i64,
    text: &str,
) -> Result<(), WsEventDTO> {
    let dto = serde_json::from_str::<SendMessageDTO>(text).map_err(|e| {
        warn!("Failed to deserialize message: {}", e);
        WsEventDTO::Error {
            code: 400,
            message: "Malformed message frame".to_string(),
        }
    })?;

    if dto.sender_id.is_some_and(|sender| sender != user_id) {
        warn!(claimed = ?dto.sender_id, "Sender id does not match the session user");
        return Err(WsEventDTO::Error {
            code: 403,
            message: "Sender does not match the authenticated user".to_string(),
        });
    }

    match process_message(state, user_id, dto).await {
        Ok(saved) => {
            debug!(message_id = saved.id, "Message processed");
            Ok(())
        }
        Err(e) => Err(WsEventDTO::Error {
            code: e.status().as_u16(),
            message: e.message().to_string(),
        }),
    }
}
