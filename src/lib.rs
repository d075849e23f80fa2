//! Alumni portal server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod handlers;
pub mod repositories;
pub mod services;
pub mod ws;

// Re-export dei tipi principali per facilitare l'import
pub use core::{AppError, AppState, auth, config};
pub use handlers::root;

use axum::{
    Router, middleware,
    routing::{any, delete, get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    use ws::ws_handler;

    Router::new()
        .route("/", get(root))
        .nest("/api/auth", configure_auth_routes())
        .merge(configure_profile_routes(state.clone()))
        .merge(configure_connection_routes(state.clone()))
        .merge(configure_chat_routes(state.clone()))
        .merge(configure_portal_routes(state.clone()))
        .route(
            "/ws",
            any(ws_handler).layer(middleware::from_fn_with_state(
                state.clone(),
                core::authentication_middleware,
            )),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Configura le routes di autenticazione, le uniche senza token
fn configure_auth_routes() -> Router<Arc<AppState>> {
    use handlers::*;
    Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login_user))
        .route("/reset-password-direct", post(reset_password_direct))
        .route("/verify-user", get(verify_user))
}

fn configure_profile_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use handlers::*;
    Router::new()
        .route("/api/profile", get(get_my_profile).put(update_my_profile))
        .layer(middleware::from_fn_with_state(
            state,
            core::authentication_middleware,
        ))
}

/// Configura le routes per il grafo delle connessioni
fn configure_connection_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use handlers::*;
    let routes = Router::new()
        .route("/send", post(send_connection_request))
        .route("/pending/{alumni_id}", get(pending_requests))
        .route("/accept/{connection_id}", post(accept_connection))
        .route("/reject/{connection_id}", post(reject_connection))
        .route("/student/{student_id}", get(accepted_for_student))
        .route("/alumni/{alumni_id}", get(accepted_for_alumni))
        .route("/suggested/{student_id}", get(suggested_alumni))
        .route("/allAlumni", get(all_alumni))
        .route("/status/{student_id}", get(connection_status))
        .route("/users/{user_id}/profile", get(user_profile))
        .route("/students/{student_id}/profile", get(user_profile))
        .route("/alumni/{alumni_id}/profile", get(user_profile))
        .layer(middleware::from_fn_with_state(
            state,
            core::authentication_middleware,
        ));

    Router::new().nest("/api/connections", routes)
}

/// Configura le routes della chat punto-punto
fn configure_chat_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use handlers::*;
    let routes = Router::new()
        .route("/messages", post(send_message))
        .route(
            "/markDelivered/{message_id}/{receiver_id}",
            post(mark_as_delivered),
        )
        .route("/markAsRead/{sender_id}/{receiver_id}", post(mark_as_read))
        .route("/conversation/{user1}/{user2}", get(get_conversation))
        .route("/unreadCount/{user_id}", get(unread_count))
        .layer(middleware::from_fn_with_state(
            state,
            core::authentication_middleware,
        ));

    Router::new().nest("/api/chat", routes)
}

/// Eventi, offerte di lavoro, traguardi e dashboard
fn configure_portal_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use handlers::*;
    Router::new()
        .route("/api/events", get(list_events))
        .route("/api/events/{event_id}", get(get_event))
        .route("/api/admin/events", post(create_event))
        .route("/api/admin/events/{event_id}", delete(delete_event))
        .route("/api/jobs", get(list_jobs))
        .route("/api/alumni/jobs", get(my_jobs).post(create_job))
        .route(
            "/api/achievements",
            get(list_achievements).post(create_achievement),
        )
        .route("/api/achievements/student/me", get(my_achievements))
        .route(
            "/api/achievements/student/{student_id}",
            get(student_achievements),
        )
        .route("/api/dashboard/stats", get(dashboard_stats))
        .layer(middleware::from_fn_with_state(
            state,
            core::authentication_middleware,
        ))
}
