//! Integration tests per gli endpoints di autenticazione
//!
//! Test per:
//! - POST /api/auth/register
//! - POST /api/auth/login
//! - POST /api/auth/reset-password-direct
//! - GET  /api/auth/verify-user
//! - middleware di autenticazione sulle route protette
//!
//! Questi test usano `#[sqlx::test]` che:
//! - Crea automaticamente un database di test isolato
//! - Applica le migrations da `migrations/`
//! - Applica i fixtures specificati da `fixtures/`

mod common;

#[cfg(test)]
mod auth_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use sqlx::SqlitePool;

    fn registration(email: &str, role: &str) -> Value {
        json!({
            "email": email,
            "password": "secret123",
            "firstName": "Grace",
            "lastName": "Hopper",
            "phone": "555",
            "role": role
        })
    }

    // ============================================================
    // Test per POST /api/auth/register
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_register_student_returns_token(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/api/auth/register")
            .json(&registration("grace@wce.ac.in", "STUDENT"))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["email"], "grace@wce.ac.in");
        assert_eq!(body["role"], "STUDENT");
        assert!(body["userId"].as_i64().is_some());
        assert!(!body["token"].as_str().unwrap_or_default().is_empty());

        // Il profilo nasce insieme all'utente
        let token = body["token"].as_str().unwrap().to_string();
        let profile = server
            .get("/api/profile")
            .authorization_bearer(&token)
            .await;
        profile.assert_status_ok();
        let profile: Value = profile.json();
        assert_eq!(profile["firstName"], "Grace");
        assert_eq!(profile["lastName"], "Hopper");
        assert_eq!(profile["phone"], "555");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_register_admin_is_rejected(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/api/auth/register")
            .json(&registration("boss@wce.ac.in", "ADMIN"))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"], "Admin registration is not allowed");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_register_duplicate_email_conflicts(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/api/auth/register")
            .json(&registration("alice@wce.ac.in", "STUDENT"))
            .await;

        response.assert_status(StatusCode::CONFLICT);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_register_validation_errors(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let mut bad_email = registration("not-an-email", "STUDENT");
        let response = server.post("/api/auth/register").json(&bad_email).await;
        response.assert_status_bad_request();

        bad_email["email"] = json!("short@wce.ac.in");
        bad_email["password"] = json!("123");
        let response = server.post("/api/auth/register").json(&bad_email).await;
        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"], "Validation error");
        Ok(())
    }

    // ============================================================
    // Test per POST /api/auth/login
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_login_success(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        // I fixtures non hanno hash validi: registriamo prima un utente
        server
            .post("/api/auth/register")
            .json(&registration("logintest@wce.ac.in", "ALUMNI"))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .post("/api/auth/login")
            .json(&json!({ "email": "logintest@wce.ac.in", "password": "secret123" }))
            .await;

        response.assert_status_ok();
        let auth_header = response
            .headers()
            .get("authorization")
            .expect("Authorization header should be present")
            .to_str()
            .unwrap()
            .to_string();
        assert!(auth_header.starts_with("Bearer "));

        let body: Value = response.json();
        assert_eq!(body["role"], "ALUMNI");
        assert_eq!(auth_header, format!("Bearer {}", body["token"].as_str().unwrap()));
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_login_wrong_password(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        server
            .post("/api/auth/register")
            .json(&registration("wrongpw@wce.ac.in", "STUDENT"))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .post("/api/auth/login")
            .json(&json!({ "email": "wrongpw@wce.ac.in", "password": "nope-nope" }))
            .await;

        response.assert_status_unauthorized();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_login_nonexistent_user(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/api/auth/login")
            .json(&json!({ "email": "ghost@wce.ac.in", "password": "password123" }))
            .await;

        response.assert_status_unauthorized();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_login_missing_password(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/api/auth/login")
            .json(&json!({ "email": "alice@wce.ac.in" }))
            .await;

        // 422 Unprocessable Entity quando manca un campo obbligatorio
        response.assert_status_unprocessable_entity();
        Ok(())
    }

    // ============================================================
    // Test per reset password e verify-user
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_reset_password_then_login(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/api/auth/reset-password-direct")
            .json(&json!({ "email": "alice@wce.ac.in", "newPassword": "brandnew1" }))
            .await;
        response.assert_status_ok();

        server
            .post("/api/auth/login")
            .json(&json!({ "email": "alice@wce.ac.in", "password": "brandnew1" }))
            .await
            .assert_status_ok();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_reset_password_errors(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        server
            .post("/api/auth/reset-password-direct")
            .json(&json!({ "email": "ghost@wce.ac.in", "newPassword": "brandnew1" }))
            .await
            .assert_status_not_found();

        server
            .post("/api/auth/reset-password-direct")
            .json(&json!({ "email": "alice@wce.ac.in", "newPassword": "123" }))
            .await
            .assert_status_bad_request();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_verify_user(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        server
            .get("/api/auth/verify-user")
            .add_query_param("email", "bob@wce.ac.in")
            .await
            .assert_status_ok();

        server
            .get("/api/auth/verify-user")
            .add_query_param("email", "ghost@wce.ac.in")
            .await
            .assert_status_not_found();
        Ok(())
    }

    // ============================================================
    // Middleware di autenticazione
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_protected_route_requires_token(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        // senza header -> 403
        server.get("/api/profile").await.assert_status_forbidden();

        // token non decodificabile -> 401
        server
            .get("/api/profile")
            .authorization_bearer("not-a-jwt")
            .await
            .assert_status_unauthorized();

        // token firmato con un altro segreto -> 401
        let foreign = create_test_jwt(1, "alice@wce.ac.in", "STUDENT", "another-secret");
        server
            .get("/api/profile")
            .authorization_bearer(&foreign)
            .await
            .assert_status_unauthorized();

        // token valido per un'email sconosciuta -> 401
        let ghost = create_test_jwt(99, "ghost@wce.ac.in", "STUDENT", JWT_SECRET);
        server
            .get("/api/profile")
            .authorization_bearer(&ghost)
            .await
            .assert_status_unauthorized();
        Ok(())
    }

    #[sqlx::test]
    async fn test_root_is_public(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        let response = server.get("/").await;
        response.assert_status_ok();
        response.assert_text("Server is running!");
        Ok(())
    }
}
