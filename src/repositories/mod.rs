//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Questo modulo organizza i repository in sotto-moduli separati per una migliore manutenibilità.
//! Ogni repository gestisce le operazioni di database per una specifica tabella e tiene
//! un clone del pool di connessioni.

// ************************* NOTA SU SQLX ************************* //

/*
   Le query usano le funzioni runtime `sqlx::query` / `sqlx::query_as::<_, T>` con
   `#[derive(sqlx::FromRow)]` sulle entity: così il crate compila senza un database
   raggiungibile e senza cache offline.
   Le INSERT e le UPDATE condizionali finiscono con `RETURNING *` (SQLite >= 3.35):
   la riga salvata torna indietro con la stessa istruzione, senza una seconda SELECT.

   Number of Rows	Method to Call	Returns
   None	            .execute(...).await	        sqlx::Result<SqliteQueryResult>
   Zero or One	    .fetch_optional(...).await	sqlx::Result<Option<T>>
   Exactly One	    .fetch_one(...).await	    sqlx::Result<T>
   Multiple	        .fetch_all(...).await	    sqlx::Result<Vec<T>>

   Gli errori sono propagati con `?` fino al service, dove `AppError: From<sqlx::Error>`
   sceglie il codice HTTP (unique violation -> 409, RowNotFound -> 404, pool -> 503).
*/

// ************************* MODULI REPOSITORY ************************* //

pub mod achievement;
pub mod chat_message;
pub mod connection;
pub mod event;
pub mod job;
pub mod profile;
pub mod traits;
pub mod user;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, ReadMany, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use achievement::AchievementRepository;
pub use chat_message::ChatMessageRepository;
pub use connection::ConnectionRepository;
pub use event::EventRepository;
pub use job::JobRepository;
pub use profile::ProfileRepository;
pub use user::UserRepository;
