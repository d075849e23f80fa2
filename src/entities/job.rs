//! Job entity - Offerte di lavoro pubblicate dagli alumni

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Job {
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
