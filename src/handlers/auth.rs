//! Auth handlers - Registrazione, login e recupero password

use crate::core::{AppError, AppState};
use crate::dtos::{
    AuthResponseDTO, LoginDTO, MessageResponseDTO, RegisterDTO, ResetPasswordDTO, VerifyUserQuery,
};
use crate::services::account;
use axum::{
    extract::{Json, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{error, instrument};
use validator::Validate;

#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterDTO>, // JSON body
) -> Result<(StatusCode, Json<AuthResponseDTO>), AppError> {
    body.validate()?;
    let response = account::register(&state, body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Il token torna nel body e anche nell'header `Authorization: Bearer ...`
#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn login_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginDTO>,
) -> Result<impl IntoResponse, AppError> {
    let response = account::login(&state, &body).await?;

    let mut headers = HeaderMap::new();
    let bearer = HeaderValue::from_str(&format!("Bearer {}", response.token)).map_err(|e| {
        error!("Token is not a valid header value: {:?}", e);
        AppError::internal_server_error("Internal server error")
    })?;
    headers.insert(header::AUTHORIZATION, bearer);

    Ok((StatusCode::OK, headers, Json(response)))
}

#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn reset_password_direct(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ResetPasswordDTO>,
) -> Result<Json<MessageResponseDTO>, AppError> {
    body.validate()?;
    account::reset_password_direct(&state, &body).await?;
    Ok(Json(MessageResponseDTO::new("Password reset successful")))
}

#[instrument(skip(state), fields(email = %params.email))]
pub async fn verify_user(
    State(state): State<Arc<AppState>>,
    Query(params): Query<VerifyUserQuery>, // /auth/verify-user?email=...
) -> Result<Json<MessageResponseDTO>, AppError> {
    account::verify_user(&state, &params.email).await?;
    Ok(Json(MessageResponseDTO::new("User verified")))
}
