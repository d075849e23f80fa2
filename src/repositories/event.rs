//! EventRepository - Eventi pubblicati dagli admin

use super::{Create, Delete, Read};
use crate::dtos::CreateEventDTO;
use crate::entities::Event;
use chrono::Utc;
use sqlx::{Error, SqlitePool};

pub struct EventRepository {
    connection_pool: SqlitePool,
}

impl EventRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Ordinati per data crescente (le date sono `YYYY-MM-DD`, l'ordine testuale coincide)
    pub async fn find_all(&self) -> Result<Vec<Event>, Error> {
        sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY date ASC, id ASC")
            .fetch_all(&self.connection_pool)
            .await
    }

    pub async fn count(&self) -> Result<i64, Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events")
            .fetch_one(&self.connection_pool)
            .await
    }
}

impl Create<Event, CreateEventDTO> for EventRepository {
    async fn create(&self, data: &CreateEventDTO) -> Result<Event, Error> {
        sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (title, description, date, organizer, image_url, registration_link, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.date)
        .bind(&data.organizer)
        .bind(&data.image_url)
        .bind(&data.registration_link)
        .bind(Utc::now())
        .fetch_one(&self.connection_pool)
        .await
    }
}

impl Read<Event, i64> for EventRepository {
    async fn read(&self, id: &i64) -> Result<Option<Event>, Error> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}

impl Delete<i64> for EventRepository {
    async fn delete(&self, id: &i64) -> Result<bool, Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
