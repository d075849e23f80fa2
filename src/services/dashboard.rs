//! Dashboard services

use crate::core::{AppError, AppState};
use crate::dtos::DashboardStatsDTO;
use tracing::instrument;

/// Contatori della dashboard del chiamante
#[instrument(skip(state))]
pub async fn dashboard_stats(state: &AppState, user_id: i64) -> Result<DashboardStatsDTO, AppError> {
    let (connections, jobs_posted, events) = tokio::try_join!(
        state.connection.count_accepted_for_user(user_id),
        state.job.count_by_poster(user_id),
        state.event.count(),
    )?;

    Ok(DashboardStatsDTO {
        connections,
        jobs_posted,
        events,
    })
}
