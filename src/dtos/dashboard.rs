use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDTO {
    /// connessioni ACCEPTED in cui compare l'utente
    pub connections: i64,
    pub jobs_posted: i64,
    pub events: i64,
}
