//! ConnectionRepository - Archi studente -> alumni del grafo delle connessioni

use super::{Create, Read};
use crate::dtos::CreateConnectionDTO;
use crate::entities::{Connection, ConnectionStatus};
use chrono::Utc;
use sqlx::{Error, SqlitePool};

pub struct ConnectionRepository {
    connection_pool: SqlitePool,
}

impl ConnectionRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Arco per la coppia ordinata (studente, alumni), in qualunque stato
    pub async fn find_by_pair(
        &self,
        student_id: i64,
        alumni_id: i64,
    ) -> Result<Option<Connection>, Error> {
        sqlx::query_as::<_, Connection>(
            "SELECT * FROM connections WHERE student_id = ? AND alumni_id = ?",
        )
        .bind(student_id)
        .bind(alumni_id)
        .fetch_optional(&self.connection_pool)
        .await
    }

    /// Sovrascrive lo stato senza guardare quello attuale (last write wins)
    pub async fn update_status(
        &self,
        id: i64,
        status: ConnectionStatus,
    ) -> Result<Option<Connection>, Error> {
        sqlx::query_as::<_, Connection>("UPDATE connections SET status = ? WHERE id = ? RETURNING *")
            .bind(status)
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }

    pub async fn find_by_alumni_and_status(
        &self,
        alumni_id: i64,
        status: ConnectionStatus,
    ) -> Result<Vec<Connection>, Error> {
        sqlx::query_as::<_, Connection>(
            "SELECT * FROM connections WHERE alumni_id = ? AND status = ? ORDER BY created_at ASC, id ASC",
        )
        .bind(alumni_id)
        .bind(status)
        .fetch_all(&self.connection_pool)
        .await
    }

    /// Archi ACCEPTED in cui l'utente è uno dei due estremi
    pub async fn find_accepted_for_user(&self, user_id: i64) -> Result<Vec<Connection>, Error> {
        sqlx::query_as::<_, Connection>(
            r#"
            SELECT * FROM connections
            WHERE status = 'ACCEPTED' AND (student_id = ? OR alumni_id = ?)
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(user_id)
        .bind(user_id)
        .fetch_all(&self.connection_pool)
        .await
    }

    pub async fn find_by_student(&self, student_id: i64) -> Result<Vec<Connection>, Error> {
        sqlx::query_as::<_, Connection>(
            "SELECT * FROM connections WHERE student_id = ? ORDER BY id ASC",
        )
        .bind(student_id)
        .fetch_all(&self.connection_pool)
        .await
    }

    pub async fn count_accepted_for_user(&self, user_id: i64) -> Result<i64, Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM connections WHERE status = 'ACCEPTED' AND (student_id = ? OR alumni_id = ?)",
        )
        .bind(user_id)
        .bind(user_id)
        .fetch_one(&self.connection_pool)
        .await
    }
}

impl Create<Connection, CreateConnectionDTO> for ConnectionRepository {
    async fn create(&self, data: &CreateConnectionDTO) -> Result<Connection, Error> {
        sqlx::query_as::<_, Connection>(
            r#"
            INSERT INTO connections (student_id, alumni_id, status, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(data.student_id)
        .bind(data.alumni_id)
        .bind(data.status)
        .bind(Utc::now())
        .fetch_one(&self.connection_pool)
        .await
    }
}

impl Read<Connection, i64> for ConnectionRepository {
    async fn read(&self, id: &i64) -> Result<Option<Connection>, Error> {
        sqlx::query_as::<_, Connection>("SELECT * FROM connections WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("users", "connections")))]
    async fn second_edge_for_same_pair_violates_unique_index(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = ConnectionRepository::new(pool);

        let err = repo
            .create(&CreateConnectionDTO {
                student_id: 4,
                alumni_id: 3,
                status: ConnectionStatus::Pending,
            })
            .await
            .expect_err("dave -> carol already exists as REJECTED");

        assert!(err.as_database_error().is_some_and(|e| e.is_unique_violation()));
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("users", "connections")))]
    async fn update_status_overwrites_and_returns_row(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = ConnectionRepository::new(pool);

        let updated = repo
            .update_status(1, ConnectionStatus::Rejected)
            .await?
            .expect("connection 1 exists");
        assert_eq!(updated.status, ConnectionStatus::Rejected);
        assert_eq!((updated.student_id, updated.alumni_id), (1, 2));

        assert!(repo.update_status(99, ConnectionStatus::Accepted).await?.is_none());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("users", "connections")))]
    async fn accepted_edges_match_either_endpoint(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = ConnectionRepository::new(pool);

        assert_eq!(repo.find_accepted_for_user(1).await?.len(), 1);
        assert_eq!(repo.find_accepted_for_user(2).await?.len(), 1);
        assert!(repo.find_accepted_for_user(4).await?.is_empty());
        assert_eq!(repo.count_accepted_for_user(2).await?, 1);

        let pending = repo
            .find_by_alumni_and_status(2, ConnectionStatus::Pending)
            .await?;
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].student_id, 4);
        Ok(())
    }
}
