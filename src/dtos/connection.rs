//! Connection DTOs - Proiezioni del grafo delle connessioni

use crate::dtos::UserSummaryDTO;
use crate::entities::{Connection, ConnectionStatus};
use serde::{Deserialize, Serialize};

/// Proiezione piatta restituita da accept/reject e send
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimpleConnectionDTO {
    pub id: i64,
    pub status: ConnectionStatus,
    pub student_id: i64,
    pub alumni_id: i64,
}

impl From<Connection> for SimpleConnectionDTO {
    fn from(value: Connection) -> Self {
        Self {
            id: value.id,
            status: value.status,
            student_id: value.student_id,
            alumni_id: value.alumni_id,
        }
    }
}

/// Connessione arricchita con il riepilogo dell'altra parte.
/// Per le richieste pendenti di un alumni `user` è lo studente richiedente.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionDetailDTO {
    pub id: i64,
    pub status: ConnectionStatus,
    pub user: UserSummaryDTO,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStatusDTO {
    pub alumni_id: i64,
    pub status: ConnectionStatus,
}

impl From<Connection> for ConnectionStatusDTO {
    fn from(value: Connection) -> Self {
        Self {
            alumni_id: value.alumni_id,
            status: value.status,
        }
    }
}

/// DTO per creare un nuovo arco (senza id)
#[derive(Debug, Clone)]
pub struct CreateConnectionDTO {
    pub student_id: i64,
    pub alumni_id: i64,
    pub status: ConnectionStatus,
}
