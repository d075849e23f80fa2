use crate::entities::Job;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JobDTO {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub job_type: Option<String>,
    pub apply_link: Option<String>,
    pub posted_by: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Job> for JobDTO {
    fn from(value: Job) -> Self {
        Self {
            id: value.id,
            title: value.title,
            company: value.company,
            location: value.location,
            description: value.description,
            job_type: value.job_type,
            apply_link: value.apply_link,
            posted_by: value.posted_by,
            created_at: value.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobDTO {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub job_type: Option<String>,
    pub apply_link: Option<String>,
}
