//! Profile handlers - Profilo dell'utente autenticato

use crate::core::{AppError, AppState};
use crate::dtos::{ProfileDTO, UpdateProfileDTO};
use crate::entities::User;
use crate::services::profile;
use axum::{
    Extension,
    extract::{Json, State},
};
use std::sync::Arc;
use tracing::instrument;

#[instrument(skip(state, current_user), fields(user_id = %current_user.id))]
pub async fn get_my_profile(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>, // ottenuto dall'autenticazione tramite token jwt
) -> Result<Json<ProfileDTO>, AppError> {
    Ok(Json(profile::get_profile(&state, current_user.id).await?))
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.id))]
pub async fn update_my_profile(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<UpdateProfileDTO>,
) -> Result<Json<ProfileDTO>, AppError> {
    Ok(Json(
        profile::update_profile(&state, current_user.id, &body).await?,
    ))
}
