//! Profile DTOs - Proiezioni del profilo utente

use crate::entities::{Profile, User};
use serde::{Deserialize, Serialize};

/// Profilo completo restituito al proprietario
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDTO {
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

impl From<Profile> for ProfileDTO {
    fn from(value: Profile) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            phone: value.phone,
            batch: value.batch,
            about: value.about,
            graduation_year: value.graduation_year,
            degree: value.degree,
            branch: value.branch,
            current_company: value.current_company,
            position: value.position,
            profile_photo: value.profile_photo,
        }
    }
}

/// DTO per creare un profilo (senza id). I campi non indicati partono da stringa vuota.
#[derive(Debug, Clone, Default)]
pub struct CreateProfileDTO {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl CreateProfileDTO {
    /// Profilo di default creato al primo accesso
    pub fn placeholder(user: &User) -> Self {
        Self {
            user_id: user.id,
            first_name: "First Name".to_string(),
            last_name: "Last Name".to_string(),
            email: user.email.clone(),
            phone: String::new(),
        }
    }
}

/// Aggiornamento parziale: solo i campi presenti sovrascrivono quelli salvati.
/// `profilePhoto: ""` cancella la foto, `profilePhoto` assente la lascia invariata.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDTO {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
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

impl UpdateProfileDTO {
    pub fn merge_into(&self, profile: &mut Profile) {
        fn overwrite(target: &mut Option<String>, incoming: &Option<String>) {
            if let Some(value) = incoming {
                *target = Some(value.clone());
            }
        }

        overwrite(&mut profile.first_name, &self.first_name);
        overwrite(&mut profile.last_name, &self.last_name);
        overwrite(&mut profile.phone, &self.phone);
        overwrite(&mut profile.batch, &self.batch);
        overwrite(&mut profile.about, &self.about);
        overwrite(&mut profile.graduation_year, &self.graduation_year);
        overwrite(&mut profile.degree, &self.degree);
        overwrite(&mut profile.branch, &self.branch);
        overwrite(&mut profile.current_company, &self.current_company);
        overwrite(&mut profile.position, &self.position);
        // "" arriva come Some("") e sovrascrive: è il segnale di cancellazione della foto
        overwrite(&mut profile.profile_photo, &self.profile_photo);
    }
}

/// Proiezione pubblica di un utente arricchita col profilo.
/// Non contiene mai password o ruolo.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDTO {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_photo: Option<String>,
    pub about: String,
    pub branch: String,
    pub batch: String,
    pub degree: String,
    pub graduation_year: String,
    pub current_company: String,
    pub position: String,
    pub phone: String,
}

impl UserSummaryDTO {
    pub fn new(user: &User, profile: Option<&Profile>) -> Self {
        let field = |f: fn(&Profile) -> &Option<String>| {
            profile
                .and_then(|p| f(p).clone())
                .unwrap_or_default()
        };

        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: field(|p| &p.first_name),
            last_name: field(|p| &p.last_name),
            profile_photo: profile.and_then(|p| p.profile_photo.clone()),
            about: field(|p| &p.about),
            branch: field(|p| &p.branch),
            batch: field(|p| &p.batch),
            degree: field(|p| &p.degree),
            graduation_year: field(|p| &p.graduation_year),
            current_company: field(|p| &p.current_company),
            position: field(|p| &p.position),
            phone: field(|p| &p.phone),
        }
    }
}
