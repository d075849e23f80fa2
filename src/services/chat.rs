//! Chat services - Persistenza dei messaggi e notifiche di consegna
//!
//! Flusso di invio: salva -> push al destinatario -> push di conferma al mittente ->
//! promozione a DELIVERED dopo `delivery_delay` su un task separato.
//! Le push sono fire-and-forget: un utente offline non fa fallire l'invio.

use crate::core::{AppError, AppState};
use crate::dtos::{
    ChatMessageDTO, CreateChatMessageDTO, MessageStatusUpdateDTO, SendMessageDTO, WsEventDTO,
};
use crate::dtos::chat_message::MAX_CONTENT_LEN;
use crate::entities::{ChatMessage, MessageStatus};
use crate::repositories::Create;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Pubblica un evento, un destinatario offline è solo loggato
fn notify(state: &AppState, user_id: i64, event: Arc<WsEventDTO>) {
    if state.users_online.publish(user_id, event).is_err() {
        debug!(user_id, "User offline, notification dropped");
    }
}

fn notify_status(state: &AppState, message: &ChatMessage, at: DateTime<Utc>) {
    let update = WsEventDTO::MessageStatus(MessageStatusUpdateDTO {
        message_id: message.id,
        status: message.status,
        timestamp: at,
    });
    notify(state, message.sender_id, Arc::new(update));
}

/// Salva un messaggio: conversation id calcolato, timestamp e stato di default se assenti
#[instrument(skip(state, message), fields(sender_id = message.sender_id, receiver_id = message.receiver_id))]
pub async fn save_message(
    state: &AppState,
    mut message: CreateChatMessageDTO,
) -> Result<ChatMessage, AppError> {
    let content = message.content.trim();
    let length = content.chars().count() as u64;
    if length == 0 || length > MAX_CONTENT_LEN {
        warn!(length, "Rejected message with invalid length");
        return Err(AppError::bad_request(
            "Message content must be between 1 and 5000 characters",
        ));
    }
    if message.sender_id == message.receiver_id {
        return Err(AppError::bad_request("Cannot send a message to yourself"));
    }
    message.content = content.to_string();

    let saved = state.msg.create(&message).await?;
    info!(message_id = saved.id, conversation_id = %saved.conversation_id, "Message saved");
    Ok(saved)
}

/// Messaggi tra a e b in ordine di timestamp, simmetrico negli argomenti
#[instrument(skip(state))]
pub async fn get_conversation(
    state: &AppState,
    a: i64,
    b: i64,
) -> Result<Vec<ChatMessageDTO>, AppError> {
    let messages = state.msg.find_conversation(a, b).await?;
    debug!(count = messages.len(), "Conversation loaded");
    Ok(messages.into_iter().map(ChatMessageDTO::from).collect())
}

/// SENT -> DELIVERED solo se `receiver_id` è il destinatario; altrimenti nessun effetto.
/// Ritorna il messaggio aggiornato quando la transizione avviene.
#[instrument(skip(state))]
pub async fn mark_message_as_delivered(
    state: &AppState,
    message_id: i64,
    receiver_id: i64,
) -> Result<Option<ChatMessageDTO>, AppError> {
    let now = Utc::now();
    let Some(updated) = state.msg.mark_delivered(message_id, receiver_id, now).await? else {
        debug!("Message not eligible for delivery promotion");
        return Ok(None);
    };

    info!("Message marked as delivered");
    notify_status(state, &updated, now);
    Ok(Some(updated.into()))
}

/// Tutti i SENT da `sender_id` a `receiver_id` diventano READ.
/// Una notifica di stato al mittente per ogni messaggio transitato.
#[instrument(skip(state))]
pub async fn mark_messages_as_read(
    state: &AppState,
    sender_id: i64,
    receiver_id: i64,
) -> Result<usize, AppError> {
    let now = Utc::now();
    let updated = state.msg.mark_read(sender_id, receiver_id, now).await?;

    for message in &updated {
        notify_status(state, message, now);
    }

    info!(count = updated.len(), "Messages marked as read");
    Ok(updated.len())
}

/// Conta solo i messaggi ancora SENT: un DELIVERED non letto non è "unread"
#[instrument(skip(state))]
pub async fn unread_message_count(state: &AppState, user_id: i64) -> Result<i64, AppError> {
    Ok(state.msg.count_unread(user_id).await?)
}

/// Invio completo di un messaggio da parte di `sender_id` (sempre l'utente autenticato)
#[instrument(skip(state, dto), fields(receiver_id = dto.receiver_id))]
pub async fn process_message(
    state: &Arc<AppState>,
    sender_id: i64,
    dto: SendMessageDTO,
) -> Result<ChatMessageDTO, AppError> {
    let saved = save_message(
        state,
        CreateChatMessageDTO::new(sender_id, dto.receiver_id, dto.content),
    )
    .await?;

    let event = Arc::new(WsEventDTO::Message(ChatMessageDTO::from(saved.clone())));
    notify(state, saved.receiver_id, event.clone());
    notify(state, saved.sender_id, event);

    schedule_delivery(state.clone(), saved.id, saved.receiver_id);

    Ok(saved.into())
}

/// Promozione a DELIVERED dopo il ritardo configurato, best effort.
/// Non è una ricevuta di consegna: avviene anche se il destinatario è offline.
fn schedule_delivery(state: Arc<AppState>, message_id: i64, receiver_id: i64) {
    tokio::spawn(async move {
        tokio::time::sleep(state.delivery_delay).await;
        if let Err(e) = mark_message_as_delivered(&state, message_id, receiver_id).await {
            error!(message_id, "Deferred delivery promotion failed: {:?}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::conversation_id;
    use sqlx::SqlitePool;
    use std::time::Duration;

    fn state(pool: SqlitePool, delay_ms: u64) -> Arc<AppState> {
        Arc::new(AppState::new(
            pool,
            "test-secret".to_string(),
            Duration::from_millis(delay_ms),
        ))
    }

    #[sqlx::test]
    async fn send_then_deliver_with_wrong_and_right_receiver(pool: SqlitePool) {
        let state = state(pool, 100);

        let saved = save_message(&state, CreateChatMessageDTO::new(10, 20, "hi"))
            .await
            .expect("saved");
        assert_eq!(saved.status, MessageStatus::Sent);
        assert_eq!(saved.conversation_id, conversation_id(10, 20));
        assert_eq!(saved.conversation_id, "10_20");

        let untouched = mark_message_as_delivered(&state, saved.id, 99)
            .await
            .expect("no-op");
        assert!(untouched.is_none());

        let delivered = mark_message_as_delivered(&state, saved.id, 20)
            .await
            .expect("delivered")
            .expect("transition happened");
        assert_eq!(delivered.status, MessageStatus::Delivered);
        assert!(delivered.delivered_at.is_some());
    }

    #[sqlx::test]
    async fn unread_count_follows_mark_as_read(pool: SqlitePool) {
        let state = state(pool, 100);

        save_message(&state, CreateChatMessageDTO::new(10, 20, "hi"))
            .await
            .expect("saved");
        assert_eq!(unread_message_count(&state, 20).await.expect("count"), 1);

        assert_eq!(mark_messages_as_read(&state, 10, 20).await.expect("read"), 1);
        assert_eq!(unread_message_count(&state, 20).await.expect("count"), 0);

        // READ non torna indietro a DELIVERED
        let conversation = get_conversation(&state, 20, 10).await.expect("conversation");
        let id = conversation[0].id;
        assert!(mark_message_as_delivered(&state, id, 20).await.expect("no-op").is_none());
        assert_eq!(conversation[0].status, MessageStatus::Read);
    }

    #[sqlx::test]
    async fn content_is_trimmed_and_bounded(pool: SqlitePool) {
        let state = state(pool, 100);

        let saved = save_message(&state, CreateChatMessageDTO::new(1, 2, "  ciao  "))
            .await
            .expect("saved");
        assert_eq!(saved.content, "ciao");

        let blank = save_message(&state, CreateChatMessageDTO::new(1, 2, "   ")).await;
        assert_eq!(blank.unwrap_err().status(), axum::http::StatusCode::BAD_REQUEST);

        let too_long = save_message(&state, CreateChatMessageDTO::new(1, 2, "x".repeat(5001))).await;
        assert!(too_long.is_err());

        let to_self = save_message(&state, CreateChatMessageDTO::new(1, 1, "me")).await;
        assert!(to_self.is_err());
    }

    #[sqlx::test]
    async fn process_message_notifies_both_parties_and_promotes(pool: SqlitePool) {
        let state = state(pool, 20);
        let mut receiver_rx = state.users_online.subscribe(20);
        let mut sender_rx = state.users_online.subscribe(10);

        let dto = SendMessageDTO {
            sender_id: None,
            receiver_id: 20,
            content: "hi".to_string(),
        };
        let saved = process_message(&state, 10, dto).await.expect("sent");

        for rx in [&mut receiver_rx, &mut sender_rx] {
            match rx.recv().await.expect("event").as_ref() {
                WsEventDTO::Message(m) => assert_eq!(m.id, saved.id),
                other => panic!("unexpected event {:?}", other),
            }
        }

        // la promozione arriva al mittente come aggiornamento di stato
        let update = tokio::time::timeout(Duration::from_secs(2), sender_rx.recv())
            .await
            .expect("status update in time")
            .expect("event");
        match update.as_ref() {
            WsEventDTO::MessageStatus(s) => {
                assert_eq!(s.message_id, saved.id);
                assert_eq!(s.status, MessageStatus::Delivered);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }
}
