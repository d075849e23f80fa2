//! User DTOs - Data Transfer Objects per utenti e autenticazione

use crate::entities::Role;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO per creare un nuovo utente (senza id), la password è già hashata
#[derive(Debug, Clone)]
pub struct CreateUserDTO {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Body di registrazione
#[derive(Deserialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDTO {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,

    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub role: Role,
}

/// DTO per il login (solo email e password)
#[derive(Deserialize, Debug)]
pub struct LoginDTO {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordDTO {
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub new_password: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponseDTO {
    pub token: String,
    pub message: String,
    pub email: String,
    pub role: Role,
    pub user_id: i64,
}

/// Risposta generica `{ "message": ... }`
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponseDTO {
    pub message: String,
}

impl MessageResponseDTO {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
