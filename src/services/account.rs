//! Account services - Registrazione, login, reset password e utente admin iniziale

use crate::core::{AppError, AppState, encode_jwt};
use crate::dtos::{
    AuthResponseDTO, CreateProfileDTO, CreateUserDTO, LoginDTO, RegisterDTO, ResetPasswordDTO,
};
use crate::entities::{Role, User};
use tracing::{info, instrument, warn};

fn auth_response(user: &User, token: String, message: &str) -> AuthResponseDTO {
    AuthResponseDTO {
        token,
        message: message.to_string(),
        email: user.email.clone(),
        role: user.role,
        user_id: user.id,
    }
}

/// Il body è già stato validato (formato email, lunghezza password)
#[instrument(skip(state, body), fields(email = %body.email, role = %body.role))]
pub async fn register(state: &AppState, body: RegisterDTO) -> Result<AuthResponseDTO, AppError> {
    if body.role == Role::Admin {
        warn!("Attempted admin self-registration");
        return Err(AppError::bad_request("Admin registration is not allowed"));
    }

    if state.user.find_by_email(&body.email).await?.is_some() {
        return Err(AppError::conflict("Email already registered"));
    }

    let password = User::hash_password(&body.password)?;
    let profile = CreateProfileDTO {
        first_name: body.first_name,
        last_name: body.last_name.unwrap_or_default(),
        email: body.email.clone(),
        phone: body.phone.unwrap_or_default(),
        ..Default::default()
    };
    let user = state
        .user
        .create_with_profile(
            &CreateUserDTO {
                email: body.email,
                password,
                role: body.role,
            },
            profile,
        )
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::conflict("Email already registered")
            }
            other => AppError::from(other),
        })?;

    let token = encode_jwt(&user, &state.jwt_secret)?;
    info!(user_id = user.id, "User registered");
    Ok(auth_response(&user, token, "Registration successful"))
}

#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn login(state: &AppState, body: &LoginDTO) -> Result<AuthResponseDTO, AppError> {
    let user = state
        .user
        .find_by_email(&body.email)
        .await?
        .ok_or_else(|| {
            warn!("Login with unknown email");
            AppError::unauthorized("Invalid email or password")
        })?;

    if !user.verify_password(&body.password) {
        warn!("Login with wrong password");
        return Err(AppError::unauthorized("Invalid email or password"));
    }

    let token = encode_jwt(&user, &state.jwt_secret)?;
    info!(user_id = user.id, "User logged in");
    Ok(auth_response(&user, token, "Login successful"))
}

#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn reset_password_direct(
    state: &AppState,
    body: &ResetPasswordDTO,
) -> Result<(), AppError> {
    let user = state
        .user
        .find_by_email(&body.email)
        .await?
        .ok_or_else(|| AppError::not_found("No account found with this email"))?;

    let hash = User::hash_password(&body.new_password)?;
    state.user.update_password(user.id, &hash).await?;
    info!(user_id = user.id, "Password reset");
    Ok(())
}

#[instrument(skip(state))]
pub async fn verify_user(state: &AppState, email: &str) -> Result<(), AppError> {
    state
        .user
        .find_by_email(email)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::not_found("No account found with this email"))
}

/// Crea l'account ADMIN configurato se non esiste. Idempotente.
#[instrument(skip(state, password))]
pub async fn seed_admin(state: &AppState, email: &str, password: &str) -> Result<(), AppError> {
    if state.user.find_by_email(email).await?.is_some() {
        info!("Admin account already present");
        return Ok(());
    }

    let admin = state
        .user
        .create_with_profile(
            &CreateUserDTO {
                email: email.to_string(),
                password: User::hash_password(password)?,
                role: Role::Admin,
            },
            CreateProfileDTO {
                first_name: "WCE".to_string(),
                last_name: "Admin".to_string(),
                email: email.to_string(),
                ..Default::default()
            },
        )
        .await?;

    info!(user_id = admin.id, "Admin account created");
    Ok(())
}
