//! Event services

use crate::core::{AppError, AppState};
use crate::dtos::{CreateEventDTO, EventDTO};
use crate::repositories::{Create, Delete, Read};
use tracing::{info, instrument};
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_events(state: &AppState) -> Result<Vec<EventDTO>, AppError> {
    Ok(state
        .event
        .find_all()
        .await?
        .into_iter()
        .map(EventDTO::from)
        .collect())
}

#[instrument(skip(state))]
pub async fn get_event(state: &AppState, event_id: i64) -> Result<EventDTO, AppError> {
    state
        .event
        .read(&event_id)
        .await?
        .map(EventDTO::from)
        .ok_or_else(|| AppError::not_found("Event not found"))
}

/// Titolo, descrizione e organizzatore non possono essere vuoti dopo il trim
#[instrument(skip(state, body), fields(title = %body.title))]
pub async fn create_event(state: &AppState, body: CreateEventDTO) -> Result<EventDTO, AppError> {
    let body = body.trimmed();
    body.validate()?;

    let event = state.event.create(&body).await?;
    info!(event_id = event.id, "Event created");
    Ok(event.into())
}

#[instrument(skip(state))]
pub async fn delete_event(state: &AppState, event_id: i64) -> Result<(), AppError> {
    if !state.event.delete(&event_id).await? {
        return Err(AppError::not_found("Event not found"));
    }
    info!("Event deleted");
    Ok(())
}
