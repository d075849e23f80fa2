//! Job services

use crate::core::{AppError, AppState};
use crate::dtos::{CreateJobDTO, JobDTO};
use crate::repositories::Create;
use crate::repositories::job::NewJob;
use tracing::{info, instrument};

#[instrument(skip(state, body))]
pub async fn create_job(
    state: &AppState,
    posted_by: i64,
    body: &CreateJobDTO,
) -> Result<JobDTO, AppError> {
    let job = state
        .job
        .create(&NewJob {
            posted_by,
            job: body,
        })
        .await?;
    info!(job_id = job.id, "Job posted");
    Ok(job.into())
}

#[instrument(skip(state))]
pub async fn list_jobs(state: &AppState) -> Result<Vec<JobDTO>, AppError> {
    Ok(state.job.find_all().await?.into_iter().map(JobDTO::from).collect())
}

#[instrument(skip(state))]
pub async fn jobs_posted_by(state: &AppState, alumni_id: i64) -> Result<Vec<JobDTO>, AppError> {
    Ok(state
        .job
        .find_by_poster(alumni_id)
        .await?
        .into_iter()
        .map(JobDTO::from)
        .collect())
}
