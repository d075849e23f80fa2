//! Chat handlers - Invio messaggi e aggiornamento stati via REST

use crate::core::{AppError, AppState, require_participant, require_self_or_admin};
use crate::dtos::{ChatMessageDTO, MessageResponseDTO, SendMessageDTO, UnreadCountDTO};
use crate::entities::User;
use crate::services::chat;
use axum::{
    Extension,
    extract::{Json, Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{instrument, warn};
use validator::Validate;

/// Stesso flusso dei frame WebSocket: il mittente è l'utente autenticato
#[instrument(skip(state, current_user, body), fields(user_id = %current_user.id))]
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<SendMessageDTO>,
) -> Result<(StatusCode, Json<ChatMessageDTO>), AppError> {
    body.validate()?;
    if body.sender_id.is_some_and(|sender| sender != current_user.id) {
        warn!("Sender id does not match the authenticated user");
        return Err(AppError::forbidden(
            "Sender does not match the authenticated user",
        ));
    }

    let saved = chat::process_message(&state, current_user.id, body).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[instrument(skip(state))]
pub async fn mark_as_delivered(
    State(state): State<Arc<AppState>>,
    Path((message_id, receiver_id)): Path<(i64, i64)>,
) -> Result<Json<MessageResponseDTO>, AppError> {
    let message = match chat::mark_message_as_delivered(&state, message_id, receiver_id).await? {
        Some(_) => "Message marked as delivered",
        None => "Message status unchanged",
    };
    Ok(Json(MessageResponseDTO::new(message)))
}

/// Solo il destinatario legge i messaggi a lui indirizzati
#[instrument(skip(state, current_user), fields(user_id = %current_user.id))]
pub async fn mark_as_read(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path((sender_id, receiver_id)): Path<(i64, i64)>,
) -> Result<Json<Value>, AppError> {
    require_self_or_admin(&current_user, receiver_id)?;
    let updated = chat::mark_messages_as_read(&state, sender_id, receiver_id).await?;
    Ok(Json(json!({
        "message": "Messages marked as read",
        "updated": updated,
    })))
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.id))]
pub async fn get_conversation(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path((user1, user2)): Path<(i64, i64)>,
) -> Result<Json<Vec<ChatMessageDTO>>, AppError> {
    require_participant(&current_user, &[user1, user2])?;
    Ok(Json(chat::get_conversation(&state, user1, user2).await?))
}

#[instrument(skip(state, current_user), fields(caller_id = %current_user.id))]
pub async fn unread_count(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(user_id): Path<i64>,
) -> Result<Json<UnreadCountDTO>, AppError> {
    require_self_or_admin(&current_user, user_id)?;
    let count = chat::unread_message_count(&state, user_id).await?;
    Ok(Json(UnreadCountDTO { count }))
}
