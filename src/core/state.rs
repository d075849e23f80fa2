//! Application State - Stato globale dell'applicazione
//!
//! Contiene tutti i repository, configurazioni e stato condiviso
//! necessario per gestire l'applicazione.

use crate::repositories::{
    AchievementRepository, ChatMessageRepository, ConnectionRepository, EventRepository,
    JobRepository, ProfileRepository, UserRepository,
};
use crate::ws::usermap::UserMap;
use sqlx::SqlitePool;
use std::time::Duration;

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Repository per la gestione degli utenti
    pub user: UserRepository,

    pub profile: ProfileRepository,

    /// Archi studente -> alumni
    pub connection: ConnectionRepository,

    /// Repository per la gestione dei messaggi
    pub msg: ChatMessageRepository,

    pub event: EventRepository,

    pub job: JobRepository,

    pub achievement: AchievementRepository,

    /// Secret key per JWT token
    pub jwt_secret: String,

    /// Attesa prima di promuovere un messaggio appena inviato a DELIVERED
    pub delivery_delay: Duration,

    /// Mappa concorrente degli utenti con almeno una sessione WebSocket aperta
    /// Key: user_id, Value: canale broadcast verso tutte le sessioni dell'utente
    pub users_online: UserMap,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito.
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni SQLite condiviso
    /// * `jwt_secret` - Chiave segreta per la firma dei token JWT
    /// * `delivery_delay` - Ritardo della promozione a DELIVERED
    pub fn new(pool: SqlitePool, jwt_secret: String, delivery_delay: Duration) -> Self {
        Self {
            user: UserRepository::new(pool.clone()),
            profile: ProfileRepository::new(pool.clone()),
            connection: ConnectionRepository::new(pool.clone()),
            msg: ChatMessageRepository::new(pool.clone()),
            event: EventRepository::new(pool.clone()),
            job: JobRepository::new(pool.clone()),
            achievement: AchievementRepository::new(pool),
            jwt_secret,
            delivery_delay,
            users_online: UserMap::new(),
        }
    }
}
