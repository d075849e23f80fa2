//! Achievement entity - Risultati pubblicati dagli studenti

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Achievement {
    pub id: i64,
    pub student_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub created_at: DateTime<Utc>,
}
