use crate::core::{AppError, AppState};
use crate::dtos::DashboardStatsDTO;
use crate::entities::User;
use crate::services::dashboard;
use axum::{
    Extension,
    extract::{Json, State},
};
use std::sync::Arc;
use tracing::instrument;

#[instrument(skip(state, current_user), fields(user_id = %current_user.id))]
pub async fn dashboard_stats(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
) -> Result<Json<DashboardStatsDTO>, AppError> {
    Ok(Json(
        dashboard::dashboard_stats(&state, current_user.id).await?,
    ))
}
