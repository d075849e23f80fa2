//! Services module - Logica di business
//!
//! Ogni funzione riceve lo stato condiviso e ritorna `Result<_, AppError>`:
//! gli errori escono già tipizzati, gli handler HTTP e il WebSocket li propagano così come sono.

pub mod account;
pub mod achievement;
pub mod chat;
pub mod connection;
pub mod dashboard;
pub mod event;
pub mod job;
pub mod profile;

use crate::core::{AppError, AppState};
use crate::dtos::UserSummaryDTO;
use crate::entities::User;
use crate::repositories::Read;
use std::collections::HashMap;

/// Carica un utente o ritorna 404 con il messaggio indicato
pub(crate) async fn require_user(
    state: &AppState,
    user_id: i64,
    not_found: &'static str,
) -> Result<User, AppError> {
    state
        .user
        .read(&user_id)
        .await?
        .ok_or_else(|| AppError::not_found(not_found))
}

/// Arricchisce gli utenti con il loro profilo (una sola query per tutti i profili)
pub(crate) async fn user_summaries(
    state: &AppState,
    users: &[User],
) -> Result<Vec<UserSummaryDTO>, AppError> {
    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    let profiles: HashMap<i64, _> = state
        .profile
        .find_many_by_user_ids(&ids)
        .await?
        .into_iter()
        .map(|p| (p.user_id, p))
        .collect();

    Ok(users
        .iter()
        .map(|u| UserSummaryDTO::new(u, profiles.get(&u.id)))
        .collect())
}
