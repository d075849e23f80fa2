#![allow(dead_code)]

use alumni_portal::core::AppState;
use axum_test::TestServer;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

pub const JWT_SECRET: &str = "ilmiobellissimosegretochevaassolutamentecambiato";

/// Utenti dei fixtures: (id, email, ruolo)
pub const ALICE: (i64, &str, &str) = (1, "alice@wce.ac.in", "STUDENT");
pub const BOB: (i64, &str, &str) = (2, "bob@wce.ac.in", "ALUMNI");
pub const CAROL: (i64, &str, &str) = (3, "carol@wce.ac.in", "ALUMNI");
pub const DAVE: (i64, &str, &str) = (4, "dave@wce.ac.in", "STUDENT");
pub const ADMIN: (i64, &str, &str) = (5, "admin@wce.ac.in", "ADMIN");

/// Crea un AppState per i test, con promozione a DELIVERED rapida
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    create_test_state_with_delay(pool, Duration::from_millis(50))
}

/// AppState con un ritardo di consegna scelto dal test
pub fn create_test_state_with_delay(pool: SqlitePool, delivery_delay: Duration) -> Arc<AppState> {
    Arc::new(AppState::new(pool, JWT_SECRET.to_string(), delivery_delay))
}

/// Crea un TestServer per i test
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = alumni_portal::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Genera un JWT token per testing, valido per 24 ore
pub fn create_test_jwt(user_id: i64, email: &str, role: &str, jwt_secret: &str) -> String {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Claims {
        id: i64,
        email: String,
        role: String,
        exp: usize,
        iat: usize,
    }

    let now = Utc::now();
    let expiration = now
        .checked_add_signed(Duration::hours(24))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        id: user_id,
        email: email.to_string(),
        role: role.to_string(),
        exp: expiration,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("Failed to create JWT token")
}

/// Token per uno degli utenti dei fixtures
pub fn token_for(user: (i64, &str, &str)) -> String {
    create_test_jwt(user.0, user.1, user.2, JWT_SECRET)
}
