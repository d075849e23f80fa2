//! WebSocket Module - Gestione WebSocket per comunicazione real-time
//!
//! Questo modulo gestisce le connessioni WebSocket per la comunicazione in tempo reale
//! tra client e server. Include:
//! - Gestione upgrade HTTP -> WebSocket
//! - Gestione connessioni (split sender/receiver)
//! - Parsing dei frame in ingresso e invio dei messaggi di chat
//! - Canali di notifica per utente (publish/subscribe)

pub mod connection;
pub mod event_handlers;
pub mod usermap;

// Re-exports pubblici
pub use connection::handle_socket;
pub use usermap::UserMap;

use crate::{AppState, entities::User};
use axum::{
    Extension,
    extract::{State, ws::WebSocketUpgrade},
    response::Response,
};
use std::sync::Arc;

/// Capacità del canale broadcast di ogni utente; un receiver in ritardo salta gli eventi persi
pub const BROADCAST_CHANNEL_CAPACITY: usize = 100;
/// Intervallo minimo tra due frame letti dalla stessa sessione
pub const RATE_LIMITER_MILLIS: u64 = 10;
/// Sessione chiusa dopo questo tempo senza frame dal client
pub const TIMEOUT_DURATION_SECONDS: u64 = 300;

/// Entry point per gestire richieste di upgrade WebSocket
/// Operazioni:
/// 1. Estrarre user_id dall'autenticazione JWT
/// 2. Eseguire upgrade HTTP -> WebSocket
/// 3. Passare la connessione ad handle_socket
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>, // ottenuto dall'autenticazione JWT
) -> Response {
    let user_id = current_user.id;

    ws.on_upgrade(move |socket| handle_socket(socket, state, user_id))
}
