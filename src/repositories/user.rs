//! UserRepository - Repository per la gestione degli utenti

use super::profile::insert_profile;
use super::{Create, Read, ReadMany};
use crate::dtos::{CreateProfileDTO, CreateUserDTO};
use crate::entities::{Role, User};
use chrono::Utc;
use sqlx::{Error, QueryBuilder, Sqlite, SqlitePool};

const INSERT_USER: &str =
    "INSERT INTO users (email, password, role, created_at) VALUES (?, ?, ?, ?) RETURNING *";

// USER REPO
pub struct UserRepository {
    connection_pool: SqlitePool,
}

impl UserRepository {
    pub fn new(connection_pool: SqlitePool) -> UserRepository {
        Self { connection_pool }
    }

    /// l'email è univoca (indice UNIQUE)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.connection_pool)
            .await
    }

    /// Utente e profilo nella stessa transazione: se il profilo fallisce non resta nessun utente.
    /// `profile.user_id` viene sostituito con l'id appena generato.
    pub async fn create_with_profile(
        &self,
        user: &CreateUserDTO,
        mut profile: CreateProfileDTO,
    ) -> Result<User, Error> {
        let mut tx = self.connection_pool.begin().await?;

        let created = sqlx::query_as::<_, User>(INSERT_USER)
            .bind(&user.email)
            .bind(&user.password)
            .bind(user.role)
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await?;

        profile.user_id = created.id;
        insert_profile(&mut *tx, &profile).await?;

        tx.commit().await?;
        Ok(created)
    }

    pub async fn find_by_role(&self, role: Role) -> Result<Vec<User>, Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE role = ? ORDER BY id ASC")
            .bind(role)
            .fetch_all(&self.connection_pool)
            .await
    }

    /// Tutti gli alumni che non compaiono in nessun arco uscente dallo studente,
    /// qualunque sia lo stato dell'arco
    pub async fn find_alumni_not_connected_to(&self, student_id: i64) -> Result<Vec<User>, Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT u.* FROM users u
            WHERE u.role = 'ALUMNI'
              AND u.id NOT IN (SELECT c.alumni_id FROM connections c WHERE c.student_id = ?)
            ORDER BY u.id ASC
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.connection_pool)
        .await
    }

    pub async fn update_password(&self, id: i64, password_hash: &str) -> Result<(), Error> {
        let result = sqlx::query("UPDATE users SET password = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }
        Ok(())
    }
}

impl Create<User, CreateUserDTO> for UserRepository {
    async fn create(&self, data: &CreateUserDTO) -> Result<User, Error> {
        sqlx::query_as::<_, User>(INSERT_USER)
            .bind(&data.email)
            .bind(&data.password)
            .bind(data.role)
            .bind(Utc::now())
            .fetch_one(&self.connection_pool)
            .await
    }
}

impl Read<User, i64> for UserRepository {
    async fn read(&self, id: &i64) -> Result<Option<User>, Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}

impl ReadMany<User, i64> for UserRepository {
    async fn read_many(&self, ids: &[i64]) -> Result<Vec<User>, Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM users WHERE id IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY id ASC");

        builder
            .build_query_as::<User>()
            .fetch_all(&self.connection_pool)
            .await
    }
}
