use alumni_portal::core::{AppState, Config};
use alumni_portal::create_router;
use alumni_portal::services::account::seed_admin;
use sqlx::sqlite::SqlitePoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging: RUST_LOG se presente, altrimenti info
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Inizializza la configurazione
    let config = Config::from_env()?;
    config.print_info();

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {:?}", e);
            e
        })?;

    // Migrazioni embedded dalla cartella migrations/
    sqlx::migrate!().run(&pool).await?;
    info!("Database migrations applied");

    let state = Arc::new(AppState::new(
        pool,
        config.jwt_secret.clone(),
        config.delivery_delay,
    ));

    seed_admin(&state, &config.admin_email, &config.admin_password)
        .await
        .map_err(|e| format!("Admin seeding failed: {}", e.message()))?;

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
