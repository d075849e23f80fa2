//! Profile services - Profilo 1:1 dell'utente, creato alla prima lettura

use super::require_user;
use crate::core::{AppError, AppState};
use crate::dtos::{CreateProfileDTO, ProfileDTO, UpdateProfileDTO};
use crate::entities::Profile;
use crate::repositories::{Create, Update};
use tracing::{info, instrument};

/// Profilo esistente o, se manca, quello di default appena salvato
async fn load_or_create(state: &AppState, user_id: i64) -> Result<Profile, AppError> {
    if let Some(profile) = state.profile.find_by_user_id(user_id).await? {
        return Ok(profile);
    }

    let user = require_user(state, user_id, "User not found").await?;
    match state
        .profile
        .create(&CreateProfileDTO::placeholder(&user))
        .await
    {
        Ok(profile) => {
            info!(user_id, "Default profile created");
            Ok(profile)
        }
        // creato da una richiesta concorrente nel frattempo
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => state
            .profile
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::internal_server_error("Profile could not be loaded")),
        Err(e) => Err(e.into()),
    }
}

#[instrument(skip(state))]
pub async fn get_profile(state: &AppState, user_id: i64) -> Result<ProfileDTO, AppError> {
    Ok(load_or_create(state, user_id).await?.into())
}

#[instrument(skip(state, patch))]
pub async fn update_profile(
    state: &AppState,
    user_id: i64,
    patch: &UpdateProfileDTO,
) -> Result<ProfileDTO, AppError> {
    let mut profile = load_or_create(state, user_id).await?;
    patch.merge_into(&mut profile);

    let saved = state.profile.update(&user_id, &profile).await?;
    info!("Profile updated");
    Ok(saved.into())
}
