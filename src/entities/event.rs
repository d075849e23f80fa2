//! Event entity - Eventi pubblicati dall'amministrazione

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub organizer: String,
    pub image_url: Option<String>, // riferimento opaco, nessun upload gestito qui
    pub registration_link: Option<String>,
    pub created_at: DateTime<Utc>,
}
