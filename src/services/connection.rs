//! Connection services - Macchina a stati delle richieste di connessione
//!
//! PENDING -> ACCEPTED oppure PENDING -> REJECTED. Un arco per coppia (studente, alumni),
//! qualunque sia lo stato: un arco REJECTED blocca per sempre una nuova richiesta.

use super::{require_user, user_summaries};
use crate::core::{AppError, AppState};
use crate::dtos::{
    ConnectionDetailDTO, ConnectionStatusDTO, CreateConnectionDTO, SimpleConnectionDTO,
    UserSummaryDTO,
};
use crate::entities::{Connection, ConnectionStatus, Role};
use crate::repositories::{Create, Read, ReadMany};
use std::collections::HashMap;
use tracing::{info, instrument, warn};

#[instrument(skip(state))]
pub async fn send_connection_request(
    state: &AppState,
    student_id: i64,
    alumni_id: i64,
) -> Result<SimpleConnectionDTO, AppError> {
    require_user(state, student_id, "Student not found").await?;
    require_user(state, alumni_id, "Alumni not found").await?;

    if state
        .connection
        .find_by_pair(student_id, alumni_id)
        .await?
        .is_some()
    {
        warn!("Connection request already exists");
        return Err(AppError::conflict("Connection request already exists"));
    }

    // l'indice UNIQUE copre la corsa tra due richieste identiche concorrenti
    let created = state
        .connection
        .create(&CreateConnectionDTO {
            student_id,
            alumni_id,
            status: ConnectionStatus::Pending,
        })
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::conflict("Connection request already exists")
            }
            other => AppError::from(other),
        })?;

    info!(connection_id = created.id, "Connection request created");
    Ok(created.into())
}

/// Sovrascrive lo stato senza controllare quello corrente
async fn set_status(
    state: &AppState,
    connection_id: i64,
    status: ConnectionStatus,
) -> Result<SimpleConnectionDTO, AppError> {
    let updated = state
        .connection
        .update_status(connection_id, status)
        .await?
        .ok_or_else(|| AppError::not_found("Connection request not found"))?;

    info!(connection_id, ?status, "Connection status updated");
    Ok(updated.into())
}

#[instrument(skip(state))]
pub async fn accept_connection(
    state: &AppState,
    connection_id: i64,
) -> Result<SimpleConnectionDTO, AppError> {
    set_status(state, connection_id, ConnectionStatus::Accepted).await
}

#[instrument(skip(state))]
pub async fn reject_connection(
    state: &AppState,
    connection_id: i64,
) -> Result<SimpleConnectionDTO, AppError> {
    set_status(state, connection_id, ConnectionStatus::Rejected).await
}

/// Legge un arco, 404 se non esiste
pub async fn find_connection(state: &AppState, connection_id: i64) -> Result<Connection, AppError> {
    state
        .connection
        .read(&connection_id)
        .await?
        .ok_or_else(|| AppError::not_found("Connection request not found"))
}

/// Proietta ogni arco col riepilogo della controparte di `viewer_id`
async fn with_counterpart(
    state: &AppState,
    viewer_id: i64,
    connections: Vec<Connection>,
) -> Result<Vec<ConnectionDetailDTO>, AppError> {
    let other_ids: Vec<i64> = connections.iter().map(|c| c.other_party(viewer_id)).collect();
    let users = state.user.read_many(&other_ids).await?;
    let summaries: HashMap<i64, UserSummaryDTO> = user_summaries(state, &users)
        .await?
        .into_iter()
        .map(|s| (s.id, s))
        .collect();

    // un arco verso un utente sparito viene saltato
    Ok(connections
        .into_iter()
        .filter_map(|c| {
            let user = summaries.get(&c.other_party(viewer_id))?.clone();
            Some(ConnectionDetailDTO {
                id: c.id,
                status: c.status,
                user,
            })
        })
        .collect())
}

#[instrument(skip(state))]
pub async fn pending_requests_for_alumni(
    state: &AppState,
    alumni_id: i64,
) -> Result<Vec<ConnectionDetailDTO>, AppError> {
    let pending = state
        .connection
        .find_by_alumni_and_status(alumni_id, ConnectionStatus::Pending)
        .await?;
    with_counterpart(state, alumni_id, pending).await
}

/// 404 con `not_found` se l'utente non esiste, anche se non avrebbe connessioni
#[instrument(skip(state))]
pub async fn accepted_connections_for_user(
    state: &AppState,
    user_id: i64,
    not_found: &'static str,
) -> Result<Vec<ConnectionDetailDTO>, AppError> {
    require_user(state, user_id, not_found).await?;
    let accepted = state.connection.find_accepted_for_user(user_id).await?;
    with_counterpart(state, user_id, accepted).await
}

#[instrument(skip(state))]
pub async fn suggested_alumni(
    state: &AppState,
    student_id: i64,
) -> Result<Vec<UserSummaryDTO>, AppError> {
    require_user(state, student_id, "Student not found").await?;
    let alumni = state.user.find_alumni_not_connected_to(student_id).await?;
    user_summaries(state, &alumni).await
}

#[instrument(skip(state))]
pub async fn all_alumni(state: &AppState) -> Result<Vec<UserSummaryDTO>, AppError> {
    let alumni = state.user.find_by_role(Role::Alumni).await?;
    user_summaries(state, &alumni).await
}

#[instrument(skip(state))]
pub async fn connection_status(
    state: &AppState,
    student_id: i64,
) -> Result<Vec<ConnectionStatusDTO>, AppError> {
    require_user(state, student_id, "Student not found").await?;
    Ok(state
        .connection
        .find_by_student(student_id)
        .await?
        .into_iter()
        .map(ConnectionStatusDTO::from)
        .collect())
}

#[instrument(skip(state))]
pub async fn user_summary(state: &AppState, user_id: i64) -> Result<UserSummaryDTO, AppError> {
    let user = require_user(state, user_id, "User not found").await?;
    let profile = state.profile.find_by_user_id(user_id).await?;
    Ok(UserSummaryDTO::new(&user, profile.as_ref()))
}
