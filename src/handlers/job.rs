//! Job handlers

use crate::core::{AppError, AppState, require_role};
use crate::dtos::{CreateJobDTO, JobDTO};
use crate::entities::{Role, User};
use crate::services::job;
use axum::{
    Extension,
    extract::{Json, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_jobs(State(state): State<Arc<AppState>>) -> Result<Json<Vec<JobDTO>>, AppError> {
    Ok(Json(job::list_jobs(&state).await?))
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.id))]
pub async fn my_jobs(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
) -> Result<Json<Vec<JobDTO>>, AppError> {
    require_role(&current_user, &[Role::Alumni])?;
    Ok(Json(job::jobs_posted_by(&state, current_user.id).await?))
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.id))]
pub async fn create_job(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<CreateJobDTO>,
) -> Result<(StatusCode, Json<JobDTO>), AppError> {
    require_role(&current_user, &[Role::Alumni])?;
    body.validate()?;
    let created = job::create_job(&state, current_user.id, &body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
