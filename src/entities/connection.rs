//! Connection entity - Arco diretto studente -> alumni

use super::enums::ConnectionStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Connection {
    pub id: i64,
    pub student_id: i64, // chi invia la richiesta
    pub alumni_id: i64,  // chi la riceve e può accettarla o rifiutarla
    pub status: ConnectionStatus,
    pub created_at: DateTime<Utc>,
}

impl Connection {
    /// Returns the id of the endpoint opposite to `user_id`
    pub fn other_party(&self, user_id: i64) -> i64 {
        if self.student_id == user_id {
            self.alumni_id
        } else {
            self.student_id
        }
    }
}
