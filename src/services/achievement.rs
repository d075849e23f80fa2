//! Achievement services

use super::require_user;
use crate::core::{AppError, AppState};
use crate::dtos::{AchievementDTO, CreateAchievementDTO};
use crate::repositories::Create;
use crate::repositories::achievement::NewAchievement;
use tracing::{info, instrument};

#[instrument(skip(state, body))]
pub async fn create_achievement(
    state: &AppState,
    student_id: i64,
    body: &CreateAchievementDTO,
) -> Result<AchievementDTO, AppError> {
    let achievement = state
        .achievement
        .create(&NewAchievement {
            student_id,
            achievement: body,
        })
        .await?;
    info!(achievement_id = achievement.id, "Achievement created");
    Ok(achievement.into())
}

#[instrument(skip(state))]
pub async fn list_achievements(state: &AppState) -> Result<Vec<AchievementDTO>, AppError> {
    Ok(state
        .achievement
        .find_all()
        .await?
        .into_iter()
        .map(AchievementDTO::from)
        .collect())
}

#[instrument(skip(state))]
pub async fn achievements_of_student(
    state: &AppState,
    student_id: i64,
) -> Result<Vec<AchievementDTO>, AppError> {
    require_user(state, student_id, "Student not found").await?;
    Ok(state
        .achievement
        .find_by_student(student_id)
        .await?
        .into_iter()
        .map(AchievementDTO::from)
        .collect())
}
