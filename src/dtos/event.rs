use crate::entities::Event;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventDTO {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub organizer: String,
    pub image_url: Option<String>,
    pub registration_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Event> for EventDTO {
    fn from(value: Event) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            date: value.date,
            organizer: value.organizer,
            image_url: value.image_url,
            registration_link: value.registration_link,
            created_at: value.created_at,
        }
    }
}

/// `date` arriva come `YYYY-MM-DD`, serde rifiuta altri formati
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventDTO {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub date: NaiveDate,
    #[validate(length(min = 1, message = "Organizer is required"))]
    pub organizer: String,
    pub image_url: Option<String>,
    pub registration_link: Option<String>,
}

impl CreateEventDTO {
    /// Rimuove gli spazi ai bordi, così un titolo di soli spazi non passa la validazione
    pub fn trimmed(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.description = self.description.trim().to_string();
        self.organizer = self.organizer.trim().to_string();
        self
    }
}
