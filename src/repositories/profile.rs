//! ProfileRepository - Repository per i profili utente (1:1 con users)

use super::{Create, Update};
use crate::dtos::CreateProfileDTO;
use crate::entities::Profile;
use sqlx::{Error, Executor, QueryBuilder, Sqlite, SqlitePool};

pub struct ProfileRepository {
    connection_pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    pub async fn find_by_user_id(&self, user_id: i64) -> Result<Option<Profile>, Error> {
        sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&self.connection_pool)
            .await
    }

    /// Profili di più utenti in una sola query, gli utenti senza profilo sono semplicemente assenti
    pub async fn find_many_by_user_ids(&self, user_ids: &[i64]) -> Result<Vec<Profile>, Error> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT * FROM profiles WHERE user_id IN (");
        let mut separated = builder.separated(", ");
        for id in user_ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        builder
            .build_query_as::<Profile>()
            .fetch_all(&self.connection_pool)
            .await
    }
}

/// INSERT di un profilo su un executor qualsiasi: il pool o una transazione già aperta.
/// I campi non presenti nel DTO partono da stringa vuota.
pub(super) async fn insert_profile<'e, E>(
    executor: E,
    data: &CreateProfileDTO,
) -> Result<Profile, Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Profile>(
        r#"
        INSERT INTO profiles (
            user_id, first_name, last_name, email, phone, batch, about,
            graduation_year, degree, branch, current_company, position, profile_photo
        )
        VALUES (?, ?, ?, ?, ?, '', '', '', '', '', '', '', '')
        RETURNING *
        "#,
    )
    .bind(data.user_id)
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.email)
    .bind(&data.phone)
    .fetch_one(executor)
    .await
}

impl Create<Profile, CreateProfileDTO> for ProfileRepository {
    async fn create(&self, data: &CreateProfileDTO) -> Result<Profile, Error> {
        insert_profile(&self.connection_pool, data).await
    }
}

/// Scrive tutti i campi modificabili del profilo già fuso; la chiave è lo user_id
impl Update<Profile, Profile, i64> for ProfileRepository {
    async fn update(&self, user_id: &i64, data: &Profile) -> Result<Profile, Error> {
        sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles SET
                first_name = ?, last_name = ?, phone = ?, batch = ?, about = ?,
                graduation_year = ?, degree = ?, branch = ?, current_company = ?,
                position = ?, profile_photo = ?
            WHERE user_id = ?
            RETURNING *
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.phone)
        .bind(&data.batch)
        .bind(&data.about)
        .bind(&data.graduation_year)
        .bind(&data.degree)
        .bind(&data.branch)
        .bind(&data.current_company)
        .bind(&data.position)
        .bind(&data.profile_photo)
        .bind(user_id)
        .fetch_optional(&self.connection_pool)
        .await?
        .ok_or(Error::RowNotFound)
    }
}
