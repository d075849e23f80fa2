//! Integration tests per il canale WebSocket
//!
//! Test per:
//! - Upgrade su /ws protetto dal token
//! - Invio di un messaggio tramite frame e consegna al destinatario
//! - Errori rimandati alla sola sessione (frame malformato, mittente falso)
//! - Più sessioni dello stesso utente e rilascio del canale alla chiusura
//!
//! Questi test avviano un server reale su una porta effimera e si collegano
//! con `tokio-tungstenite`.

mod common;

#[cfg(test)]
mod ws_tests {
    use super::common::*;
    use alumni_portal::core::AppState;
    use axum::http::StatusCode;
    use futures_util::{SinkExt, StreamExt};
    use serde_json::{Value, json};
    use sqlx::SqlitePool;
    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::net::{TcpListener, TcpStream};
    use tokio_tungstenite::tungstenite::Message;
    use tokio_tungstenite::tungstenite::client::IntoClientRequest;
    use tokio_tungstenite::tungstenite::http::HeaderValue;
    use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

    type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

    /// Avvia il router completo su 127.0.0.1 con una porta scelta dal sistema
    async fn spawn_server(state: Arc<AppState>) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        let app = alumni_portal::create_router(state);
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("test server");
        });
        addr
    }

    async fn connect(addr: SocketAddr, user: (i64, &str, &str)) -> Socket {
        let mut request = format!("ws://{}/ws", addr)
            .into_client_request()
            .expect("client request");
        request.headers_mut().insert(
            "Authorization",
            HeaderValue::from_str(&format!("Bearer {}", token_for(user))).expect("header"),
        );
        let (socket, _) = connect_async(request).await.expect("websocket handshake");
        // la subscribe avviene subito dopo l'upgrade, lato server
        tokio::time::sleep(Duration::from_millis(100)).await;
        socket
    }

    /// Prossimo evento JSON dalla socket, con un limite di tempo
    async fn next_event(socket: &mut Socket) -> Value {
        loop {
            let frame = tokio::time::timeout(Duration::from_secs(2), socket.next())
                .await
                .expect("event in time")
                .expect("stream open")
                .expect("valid frame");
            if let Message::Text(text) = frame {
                return serde_json::from_str(text.as_str()).expect("json event");
            }
        }
    }

    async fn send_json(socket: &mut Socket, body: Value) {
        socket
            .send(Message::Text(body.to_string().into()))
            .await
            .expect("frame sent");
    }

    // ============================================================
    // Upgrade
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_ws_requires_token(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        server.get("/ws").await.assert_status(StatusCode::FORBIDDEN);

        server
            .get("/ws")
            .authorization_bearer("not-a-jwt")
            .await
            .assert_status_unauthorized();
        Ok(())
    }

    // ============================================================
    // Invio messaggi tramite frame
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_frame_is_delivered_to_receiver_and_echoed(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state_with_delay(pool, Duration::from_secs(60));
        let addr = spawn_server(state.clone()).await;

        let mut alice = connect(addr, ALICE).await;
        let mut bob = connect(addr, BOB).await;
        assert!(state.users_online.is_user_online(1));
        assert!(state.users_online.is_user_online(2));

        send_json(&mut alice, json!({ "receiverId": 2, "content": "hello over ws" })).await;

        let received = next_event(&mut bob).await;
        assert_eq!(received["type"], "Message");
        assert_eq!(received["data"]["senderId"], 1);
        assert_eq!(received["data"]["content"], "hello over ws");
        assert_eq!(received["data"]["status"], "SENT");

        let echoed = next_event(&mut alice).await;
        assert_eq!(echoed["type"], "Message");
        assert_eq!(echoed["data"]["id"], received["data"]["id"]);

        // il messaggio è persistito come quelli inviati via REST
        let conversation = state.msg.find_conversation(2, 1).await?;
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation[0].content, "hello over ws");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_delivery_promotion_reaches_sender_socket(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let addr = spawn_server(state).await;

        let mut alice = connect(addr, ALICE).await;
        send_json(&mut alice, json!({ "senderId": 1, "receiverId": 2, "content": "ping" })).await;

        let echoed = next_event(&mut alice).await;
        assert_eq!(echoed["type"], "Message");

        let update = next_event(&mut alice).await;
        assert_eq!(update["type"], "MessageStatus");
        assert_eq!(update["data"]["messageId"], echoed["data"]["id"]);
        assert_eq!(update["data"]["status"], "DELIVERED");
        Ok(())
    }

    // ============================================================
    // Errori sulla sessione
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_bad_frames_get_error_events(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let addr = spawn_server(state.clone()).await;
        let mut alice = connect(addr, ALICE).await;

        alice
            .send(Message::Text("{ not json".into()))
            .await
            .expect("frame sent");
        let malformed = next_event(&mut alice).await;
        assert_eq!(malformed["type"], "Error");
        assert_eq!(malformed["data"]["code"], 400);

        send_json(&mut alice, json!({ "senderId": 4, "receiverId": 2, "content": "fake" })).await;
        let spoofed = next_event(&mut alice).await;
        assert_eq!(spoofed["type"], "Error");
        assert_eq!(spoofed["data"]["code"], 403);

        send_json(&mut alice, json!({ "receiverId": 2, "content": "   " })).await;
        let blank = next_event(&mut alice).await;
        assert_eq!(blank["type"], "Error");
        assert_eq!(blank["data"]["code"], 400);

        // la sessione resta utilizzabile e nulla è stato salvato
        assert!(state.users_online.is_user_online(1));
        assert!(state.msg.find_conversation(1, 2).await?.is_empty());
        Ok(())
    }

    // ============================================================
    // Sessioni multiple e chiusura
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_every_session_of_a_user_is_notified(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state_with_delay(pool, Duration::from_secs(60));
        let addr = spawn_server(state.clone()).await;

        let mut bob_laptop = connect(addr, BOB).await;
        let mut bob_phone = connect(addr, BOB).await;
        let mut alice = connect(addr, ALICE).await;
        assert_eq!(state.users_online.online_count(), 2);

        send_json(&mut alice, json!({ "receiverId": 2, "content": "both?" })).await;

        for socket in [&mut bob_laptop, &mut bob_phone] {
            let event = next_event(socket).await;
            assert_eq!(event["data"]["content"], "both?");
        }
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_channel_released_after_close(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let addr = spawn_server(state.clone()).await;

        let mut alice = connect(addr, ALICE).await;
        assert!(state.users_online.is_user_online(1));

        alice.close(None).await.expect("close");
        tokio::time::sleep(Duration::from_millis(300)).await;

        assert!(!state.users_online.is_user_online(1));
        assert_eq!(state.users_online.online_count(), 0);
        Ok(())
    }
}
