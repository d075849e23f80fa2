use crate::entities::Achievement;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDTO {
    pub id: i64,
    pub student_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Achievement> for AchievementDTO {
    fn from(value: Achievement) -> Self {
        Self {
            id: value.id,
            student_id: value.student_id,
            title: value.title,
            description: value.description,
            image_path: value.image_path,
            created_at: value.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAchievementDTO {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub image_path: Option<String>,
}
