//! JobRepository - Offerte di lavoro

use super::Create;
use crate::dtos::CreateJobDTO;
use crate::entities::Job;
use chrono::Utc;
use sqlx::{Error, SqlitePool};

pub struct JobRepository {
    connection_pool: SqlitePool,
}

/// Input dell'insert: il DTO del client più l'autore
pub struct NewJob<'a> {
    pub posted_by: i64,
    pub job: &'a CreateJobDTO,
}

impl JobRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Più recenti prima
    pub async fn find_all(&self) -> Result<Vec<Job>, Error> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs ORDER BY created_at DESC, id DESC")
            .fetch_all(&self.connection_pool)
            .await
    }

    pub async fn find_by_poster(&self, posted_by: i64) -> Result<Vec<Job>, Error> {
        sqlx::query_as::<_, Job>(
            "SELECT * FROM jobs WHERE posted_by = ? ORDER BY created_at DESC, id DESC",
        )
        .bind(posted_by)
        .fetch_all(&self.connection_pool)
        .await
    }

    pub async fn count_by_poster(&self, posted_by: i64) -> Result<i64, Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jobs WHERE posted_by = ?")
            .bind(posted_by)
            .fetch_one(&self.connection_pool)
            .await
    }
}

impl<'a> Create<Job, NewJob<'a>> for JobRepository {
    async fn create(&self, data: &NewJob<'a>) -> Result<Job, Error> {
        sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (title, company, location, description, job_type, apply_link, posted_by, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&data.job.title)
        .bind(&data.job.company)
        .bind(&data.job.location)
        .bind(&data.job.description)
        .bind(&data.job.job_type)
        .bind(&data.job.apply_link)
        .bind(data.posted_by)
        .bind(Utc::now())
        .fetch_one(&self.connection_pool)
        .await
    }
}
