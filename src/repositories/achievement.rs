//! AchievementRepository - Traguardi degli studenti

use super::Create;
use crate::dtos::CreateAchievementDTO;
use crate::entities::Achievement;
use chrono::Utc;
use sqlx::{Error, SqlitePool};

pub struct AchievementRepository {
    connection_pool: SqlitePool,
}

pub struct NewAchievement<'a> {
    pub student_id: i64,
    pub achievement: &'a CreateAchievementDTO,
}

impl AchievementRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Achievement>, Error> {
        sqlx::query_as::<_, Achievement>(
            "SELECT * FROM achievements ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.connection_pool)
        .await
    }

    pub async fn find_by_student(&self, student_id: i64) -> Result<Vec<Achievement>, Error> {
        sqlx::query_as::<_, Achievement>(
            "SELECT * FROM achievements WHERE student_id = ? ORDER BY created_at DESC, id DESC",
        )
        .bind(student_id)
        .fetch_all(&self.connection_pool)
        .await
    }
}

impl<'a> Create<Achievement, NewAchievement<'a>> for AchievementRepository {
    async fn create(&self, data: &NewAchievement<'a>) -> Result<Achievement, Error> {
        sqlx::query_as::<_, Achievement>(
            r#"
            INSERT INTO achievements (student_id, title, description, image_path, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(data.student_id)
        .bind(&data.achievement.title)
        .bind(&data.achievement.description)
        .bind(&data.achievement.image_path)
        .bind(Utc::now())
        .fetch_one(&self.connection_pool)
        .await
    }
}
