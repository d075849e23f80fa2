//! Event handlers - Lettura pubblica, creazione e cancellazione solo admin

use crate::core::{AppError, AppState, require_role};
use crate::dtos::{CreateEventDTO, EventDTO, MessageResponseDTO};
use crate::entities::{Role, User};
use crate::services::event;
use axum::{
    Extension,
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::instrument;

#[instrument(skip(state))]
pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EventDTO>>, AppError> {
    Ok(Json(event::list_events(&state).await?))
}

#[instrument(skip(state))]
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<i64>,
) -> Result<Json<EventDTO>, AppError> {
    Ok(Json(event::get_event(&state, event_id).await?))
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.id))]
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<CreateEventDTO>,
) -> Result<(StatusCode, Json<EventDTO>), AppError> {
    require_role(&current_user, &[Role::Admin])?;
    let created = event::create_event(&state, body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.id))]
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(event_id): Path<i64>,
) -> Result<Json<MessageResponseDTO>, AppError> {
    require_role(&current_user, &[Role::Admin])?;
    event::delete_event(&state, event_id).await?;
    Ok(Json(MessageResponseDTO::new("Event deleted successfully")))
}
