//! WebSocket Connection Management - Gestione connessioni WebSocket

use crate::ws::{RATE_LIMITER_MILLIS, TIMEOUT_DURATION_SECONDS};
use crate::{AppState, dtos::WsEventDTO, ws::event_handlers::handle_text_frame};
use axum::extract::ws::{Message, Utf8Bytes, WebSocket};
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::time::{Duration, interval, timeout};
use tracing::{error, info, instrument, warn};

/// Segnali dal task di lettura a quello di scrittura della stessa sessione
pub enum InternalSignal {
    Shutdown,
    /// Errore destinato solo a questa sessione (frame malformato, mittente falso, ...)
    Error(WsEventDTO),
}

#[instrument(skip(ws, state))]
pub async fn handle_socket(ws: WebSocket, state: Arc<AppState>, user_id: i64) {
    info!("WebSocket connection established");

    // Dividiamo il WebSocket in due metà: sender e receiver
    let (ws_tx, ws_rx) = ws.split();

    // Canale interno tra listener e writer di questa sessione
    let (int_tx, int_rx) = unbounded_channel::<InternalSignal>();

    // La subscribe avviene prima di spawnare i task: nessun evento pubblicato
    // dopo l'upgrade va perso
    let events_rx = state.users_online.subscribe(user_id);

    tokio::spawn(listen_ws(user_id, ws_rx, int_tx, state.clone()));
    tokio::spawn(write_ws(user_id, ws_tx, events_rx, int_rx, state));
}

#[instrument(skip(websocket_tx, events_rx, internal_rx, state))]
pub async fn write_ws(
    user_id: i64,
    mut websocket_tx: SplitSink<WebSocket, Message>,
    mut events_rx: Receiver<Arc<WsEventDTO>>,
    mut internal_rx: UnboundedReceiver<InternalSignal>,
    state: Arc<AppState>,
) {
    info!("Write task started");

    loop {
        tokio::select! {
            event = events_rx.recv() => {
                match event {
                    Ok(event) => {
                        if send_event(&mut websocket_tx, &event).await.is_err() {
                            warn!("Failed to send event, closing connection");
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Session lagging behind, events skipped");
                    }
                    Err(RecvError::Closed) => {
                        info!("User channel closed");
                        break;
                    }
                }
            }

            signal = internal_rx.recv() => {
                match signal {
                    Some(InternalSignal::Error(event)) => {
                        if send_event(&mut websocket_tx, &event).await.is_err() {
                            error!("Failed to send error event");
                            break;
                        }
                    }
                    Some(InternalSignal::Shutdown) | None => {
                        info!("Shutdown signal received");
                        break;
                    }
                }
            }
        }
    }

    let _ = websocket_tx.close().await;

    // il receiver va rilasciato prima, altrimenti il canale risulta ancora in uso
    drop(events_rx);
    state.users_online.release(user_id);
    info!("Write task terminated");
}

async fn send_event(
    websocket_tx: &mut SplitSink<WebSocket, Message>,
    event: &WsEventDTO,
) -> Result<(), axum::Error> {
    let json = serde_json::to_string(event).map_err(|e| {
        error!("Failed to serialize event: {:?}", e);
        axum::Error::new(e)
    })?;
    websocket_tx.send(Message::Text(Utf8Bytes::from(json))).await
}

#[instrument(skip(websocket_rx, internal_tx, state))]
pub async fn listen_ws(
    user_id: i64,
    mut websocket_rx: SplitStream<WebSocket>,
    internal_tx: UnboundedSender<InternalSignal>,
    state: Arc<AppState>,
) {
    info!("Listen task started");

    let mut rate_limiter = interval(Duration::from_millis(RATE_LIMITER_MILLIS));
    let timeout_duration = Duration::from_secs(TIMEOUT_DURATION_SECONDS);

    loop {
        match timeout(timeout_duration, websocket_rx.next()).await {
            Ok(Some(msg_result)) => {
                rate_limiter.tick().await;

                let msg = match msg_result {
                    Ok(m) => m,
                    Err(e) => {
                        warn!("WebSocket error: {:?}", e);
                        break;
                    }
                };

                match msg {
                    Message::Text(text) => {
                        if let Err(event) = handle_text_frame(&state, user_id, text.as_str()).await
                        {
                            let _ = internal_tx.send(InternalSignal::Error(event));
                        }
                    }
                    Message::Close(_) => {
                        info!("Close message received");
                        break;
                    }
                    _ => {}
                }
            }
            Ok(None) => {
                info!("WebSocket stream ended");
                break;
            }
            Err(_) => {
                warn!(timeout_secs = TIMEOUT_DURATION_SECONDS, "Connection timeout");
                break;
            }
        }
    }

    // Cleanup
    info!("Cleaning up connection");
    let _ = internal_tx.send(InternalSignal::Shutdown);
    info!("Listen task terminated");
}
