//! Query DTOs - Data Transfer Objects per query string

use serde::{Deserialize, Serialize};

/// `?studentId=&alumniId=` per l'invio di una richiesta di connessione
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRequestQuery {
    pub student_id: i64,
    pub alumni_id: i64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct VerifyUserQuery {
    pub email: String,
}
