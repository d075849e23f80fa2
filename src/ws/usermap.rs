use crate::dtos::WsEventDTO;
use crate::ws::BROADCAST_CHANNEL_CAPACITY;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::SendError;
use tokio::sync::broadcast::{Receiver, Sender};
use tracing::{debug, info, instrument};

/// Canali di notifica per utente: ogni sessione WebSocket aperta di un utente
/// tiene un receiver del suo canale broadcast.
pub struct UserMap {
    /// Retrieve the tx head of a broadcast channel by user_id
    channels: DashMap<i64, Sender<Arc<WsEventDTO>>>,
}

impl Default for UserMap {
    fn default() -> Self {
        Self::new()
    }
}

impl UserMap {
    pub fn new() -> Self {
        UserMap {
            channels: DashMap::new(),
        }
    }

    /// Crea il canale se manca e ritorna un nuovo receiver
    #[instrument(skip(self))]
    pub fn subscribe(&self, user_id: i64) -> Receiver<Arc<WsEventDTO>> {
        // entry() tiene il lock dello shard: due subscribe concorrenti non creano due canali
        let rx = self
            .channels
            .entry(user_id)
            .or_insert_with(|| {
                info!("Creating new broadcast channel for user");
                broadcast::channel::<Arc<WsEventDTO>>(BROADCAST_CHANNEL_CAPACITY).0
            })
            .subscribe();
        info!("Total online users: {}", self.channels.len());
        rx
    }

    /// Pubblica un evento a tutte le sessioni dell'utente.
    /// Se nessuno è in ascolto il canale viene rimosso e l'evento torna indietro nell'errore.
    #[instrument(skip(self, event))]
    pub fn publish(
        &self,
        user_id: i64,
        event: Arc<WsEventDTO>,
    ) -> Result<usize, SendError<Arc<WsEventDTO>>> {
        let Some(channel) = self.channels.get(&user_id) else {
            debug!("User not online, event not sent");
            return Err(SendError(event));
        };

        match channel.send(event) {
            Ok(n) => {
                debug!(receivers = n, "Event sent to user sessions");
                Ok(n)
            }
            Err(e) => {
                debug!("No active receivers, removing channel");
                drop(channel); // Rilascia il lock prima della remove
                self.release(user_id);
                Err(e)
            }
        }
    }

    /// Rimuove il canale solo se non ha più receiver.
    /// Una subscribe arrivata nel frattempo mantiene il canale in vita.
    #[instrument(skip(self))]
    pub fn release(&self, user_id: i64) {
        if self
            .channels
            .remove_if(&user_id, |_, tx| tx.receiver_count() == 0)
            .is_some()
        {
            info!("User removed from online");
        }
    }

    /// Get the count of users with at least one channel
    pub fn online_count(&self) -> usize {
        self.channels.len()
    }

    pub fn is_user_online(&self, user_id: i64) -> bool {
        self.channels
            .get(&user_id)
            .is_some_and(|tx| tx.receiver_count() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_event(message: &str) -> Arc<WsEventDTO> {
        Arc::new(WsEventDTO::Error {
            code: 400,
            message: message.to_string(),
        })
    }

    #[tokio::test]
    async fn every_session_of_a_user_receives_the_event() {
        let map = UserMap::new();
        let mut first = map.subscribe(1);
        let mut second = map.subscribe(1);

        assert_eq!(map.publish(1, error_event("hello")).ok(), Some(2));

        for rx in [&mut first, &mut second] {
            match rx.recv().await.expect("event").as_ref() {
                WsEventDTO::Error { message, .. } => assert_eq!(message, "hello"),
                other => panic!("unexpected event {:?}", other),
            }
        }
    }

    #[test]
    fn publish_to_offline_user_fails() {
        let map = UserMap::new();
        assert!(map.publish(42, error_event("nobody")).is_err());
        assert!(!map.is_user_online(42));
    }

    #[test]
    fn channel_is_dropped_when_last_receiver_goes_away() {
        let map = UserMap::new();
        let rx = map.subscribe(7);
        assert!(map.is_user_online(7));

        drop(rx);
        assert!(map.publish(7, error_event("late")).is_err());
        assert_eq!(map.online_count(), 0);
    }

    #[test]
    fn release_keeps_channels_with_live_receivers() {
        let map = UserMap::new();
        let _rx = map.subscribe(3);
        map.release(3);
        assert!(map.is_user_online(3));
    }
}
