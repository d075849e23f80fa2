use crate::core::{AppError, AppState};
use crate::entities::{Role, User};
use axum::extract::State;
use axum::{Error, body::Body, extract::Request, http, http::Response, middleware::Next};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

const TOKEN_VALIDITY_HOURS: i64 = 24;

/// Contenuto del bearer token: identità e ruolo dell'utente al momento del login
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize,
    pub iat: usize,
    pub id: i64,
    pub email: String,
    pub role: Role,
}

#[instrument(skip(user, secret), fields(email = %user.email, id = %user.id))]
pub fn encode_jwt(user: &User, secret: &str) -> Result<String, Error> {
    let issued_at = Utc::now();
    let claims = Claims {
        exp: (issued_at + Duration::hours(TOKEN_VALIDITY_HOURS)).timestamp() as usize,
        iat: issued_at.timestamp() as usize,
        id: user.id,
        email: user.email.clone(),
        role: user.role,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        error!("Token signing failed: {:?}", e);
        Error::new("token signing failed")
    })
}

#[instrument(skip(token, secret))]
pub fn decode_jwt(token: &str, secret: &str) -> Result<TokenData<Claims>, Error> {
    decode(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        warn!("Rejected token: {:?}", e);
        Error::new("invalid or expired token")
    })
}

/// Verifica il bearer token e inserisce lo `User` corrente nelle extension della richiesta.
/// Header assente -> 403, token non valido o utente sconosciuto -> 401.
#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    let Some(raw_header) = req.headers().get(http::header::AUTHORIZATION) else {
        warn!("Request without Authorization header");
        return Err(AppError::forbidden("Authorization header is required"));
    };
    let auth_header = raw_header.to_str().map_err(|_| {
        warn!("Authorization header is not valid ASCII");
        AppError::forbidden("Authorization header is required")
    })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            warn!("Authorization header is not a bearer token");
            AppError::unauthorized("Invalid or expired token")
        })?;

    let token_data = decode_jwt(token, &state.jwt_secret)
        .map_err(|_| AppError::unauthorized("Invalid or expired token"))?;

    // un token valido di un account cancellato non basta
    let Some(current_user) = state.user.find_by_email(&token_data.claims.email).await? else {
        warn!(email = %token_data.claims.email, "Token for unknown account");
        return Err(AppError::unauthorized("Account no longer exists"));
    };
    debug!(user_id = current_user.id, "Request authenticated");
    req.extensions_mut().insert(current_user);
    // gli handler recuperano lo user con Extension<User>
    Ok(next.run(req).await)
}

/// 403 se il ruolo dell'utente non è tra quelli ammessi
#[instrument(skip(user), fields(user_id = %user.id))]
pub fn require_role(user: &User, allowed_roles: &[Role]) -> Result<(), AppError> {
    if !allowed_roles.contains(&user.role) {
        warn!(role = %user.role, allowed = ?allowed_roles, "Role not allowed");
        let allowed: Vec<&str> = allowed_roles.iter().map(Role::as_str).collect();
        return Err(AppError::forbidden("Access denied for this role")
            .with_details(format!("Allowed roles: {}", allowed.join(", "))));
    }
    Ok(())
}

/// Il chiamante deve essere `owner_id` oppure un ADMIN
pub fn require_self_or_admin(user: &User, owner_id: i64) -> Result<(), AppError> {
    require_participant(user, &[owner_id])
}

/// Il chiamante deve essere uno degli utenti coinvolti oppure un ADMIN
pub fn require_participant(user: &User, participants: &[i64]) -> Result<(), AppError> {
    if participants.contains(&user.id) || user.has_role(Role::Admin) {
        return Ok(());
    }
    warn!(user_id = user.id, ?participants, "User is not a participant");
    Err(AppError::forbidden("You cannot act on behalf of another user"))
}
