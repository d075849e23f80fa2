//! Handlers module - Endpoint HTTP
//!
//! Ogni sotto-modulo gestisce gli endpoint di una funzionalità: estrae path, query e body,
//! applica i controlli sul chiamante e delega ai services.

pub mod achievement;
pub mod auth;
pub mod chat;
pub mod connection;
pub mod dashboard;
pub mod event;
pub mod job;
pub mod profile;

// Re-exports per facilitare l'import
pub use achievement::{create_achievement, list_achievements, my_achievements, student_achievements};
pub use auth::{login_user, register_user, reset_password_direct, verify_user};
pub use chat::{get_conversation, mark_as_delivered, mark_as_read, send_message, unread_count};
pub use connection::{
    accept_connection, accepted_for_alumni, accepted_for_student, all_alumni, connection_status,
    pending_requests, reject_connection, send_connection_request, suggested_alumni, user_profile,
};
pub use dashboard::dashboard_stats;
pub use event::{create_event, delete_event, get_event, list_events};
pub use job::{create_job, list_jobs, my_jobs};
pub use profile::{get_my_profile, update_my_profile};

use axum::{http::StatusCode, response::IntoResponse};

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
