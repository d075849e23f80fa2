//! Profile entity - Estensione 1:1 dell'utente con dati personali, accademici e professionali

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, sqlx::FromRow)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub batch: Option<String>,
    pub about: Option<String>,
    pub graduation_year: Option<String>,
    pub degree: Option<String>,
    pub branch: Option<String>,
    pub current_company: Option<String>,
    pub position: Option<String>,
    pub profile_photo: Option<String>,
}
