//! Connection handlers - Richieste di connessione studente -> alumni

use crate::core::{AppError, AppState, require_self_or_admin};
use crate::dtos::{
    ConnectionDetailDTO, ConnectionRequestQuery, ConnectionStatusDTO, SimpleConnectionDTO,
    UserSummaryDTO,
};
use crate::entities::User;
use crate::services::connection;
use axum::{
    Extension,
    extract::{Json, Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Solo lo studente stesso (o un admin) può inviare la richiesta a suo nome
#[instrument(skip(state, current_user), fields(user_id = %current_user.id))]
pub async fn send_connection_request(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Query(params): Query<ConnectionRequestQuery>, // ?studentId=&alumniId=
) -> Result<(StatusCode, Json<SimpleConnectionDTO>), AppError> {
    require_self_or_admin(&current_user, params.student_id)?;
    let created =
        connection::send_connection_request(&state, params.student_id, params.alumni_id).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Accept e reject sono riservati all'alumni destinatario dell'arco (o a un admin)
async fn authorize_target(
    state: &AppState,
    current_user: &User,
    connection_id: i64,
) -> Result<(), AppError> {
    let edge = connection::find_connection(state, connection_id).await?;
    require_self_or_admin(current_user, edge.alumni_id)
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.id))]
pub async fn accept_connection(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(connection_id): Path<i64>,
) -> Result<Json<SimpleConnectionDTO>, AppError> {
    authorize_target(&state, &current_user, connection_id).await?;
    let updated = connection::accept_connection(&state, connection_id).await?;
    info!("Connection accepted");
    Ok(Json(updated))
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.id))]
pub async fn reject_connection(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(connection_id): Path<i64>,
) -> Result<Json<SimpleConnectionDTO>, AppError> {
    authorize_target(&state, &current_user, connection_id).await?;
    let updated = connection::reject_connection(&state, connection_id).await?;
    info!("Connection rejected");
    Ok(Json(updated))
}

#[instrument(skip(state))]
pub async fn pending_requests(
    State(state): State<Arc<AppState>>,
    Path(alumni_id): Path<i64>,
) -> Result<Json<Vec<ConnectionDetailDTO>>, AppError> {
    Ok(Json(
        connection::pending_requests_for_alumni(&state, alumni_id).await?,
    ))
}

#[instrument(skip(state))]
pub async fn accepted_for_student(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<i64>,
) -> Result<Json<Vec<ConnectionDetailDTO>>, AppError> {
    Ok(Json(
        connection::accepted_connections_for_user(&state, student_id, "Student not found").await?,
    ))
}

#[instrument(skip(state))]
pub async fn accepted_for_alumni(
    State(state): State<Arc<AppState>>,
    Path(alumni_id): Path<i64>,
) -> Result<Json<Vec<ConnectionDetailDTO>>, AppError> {
    Ok(Json(
        connection::accepted_connections_for_user(&state, alumni_id, "Alumni not found").await?,
    ))
}

#[instrument(skip(state))]
pub async fn suggested_alumni(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<i64>,
) -> Result<Json<Vec<UserSummaryDTO>>, AppError> {
    Ok(Json(connection::suggested_alumni(&state, student_id).await?))
}

#[instrument(skip(state))]
pub async fn all_alumni(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserSummaryDTO>>, AppError> {
    Ok(Json(connection::all_alumni(&state).await?))
}

#[instrument(skip(state))]
pub async fn connection_status(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<i64>,
) -> Result<Json<Vec<ConnectionStatusDTO>>, AppError> {
    Ok(Json(connection::connection_status(&state, student_id).await?))
}

#[instrument(skip(state))]
pub async fn user_profile(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserSummaryDTO>, AppError> {
    Ok(Json(connection::user_summary(&state, user_id).await?))
}
