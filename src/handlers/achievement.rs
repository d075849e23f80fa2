//! Achievement handlers

use crate::core::{AppError, AppState, require_role};
use crate::dtos::{AchievementDTO, CreateAchievementDTO};
use crate::entities::{Role, User};
use crate::services::achievement;
use axum::{
    Extension,
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_achievements(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AchievementDTO>>, AppError> {
    Ok(Json(achievement::list_achievements(&state).await?))
}

/// Solo gli studenti pubblicano traguardi, sempre a proprio nome
#[instrument(skip(state, current_user, body), fields(user_id = %current_user.id))]
pub async fn create_achievement(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<CreateAchievementDTO>,
) -> Result<(StatusCode, Json<AchievementDTO>), AppError> {
    require_role(&current_user, &[Role::Student])?;
    body.validate()?;
    let created = achievement::create_achievement(&state, current_user.id, &body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.id))]
pub async fn my_achievements(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
) -> Result<Json<Vec<AchievementDTO>>, AppError> {
    Ok(Json(
        achievement::achievements_of_student(&state, current_user.id).await?,
    ))
}

#[instrument(skip(state))]
pub async fn student_achievements(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<i64>,
) -> Result<Json<Vec<AchievementDTO>>, AppError> {
    Ok(Json(
        achievement::achievements_of_student(&state, student_id).await?,
    ))
}
