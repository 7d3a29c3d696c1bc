use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::info;

use promo_api::{build_router, AppState};
use promo_infrastructure::{create_pool, run_migrations, PgCompanyRepository, PgPromotionRepository};
use promo_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (.env is read inside)
    let config = AppConfig::load().context("failed to load configuration")?;

    // Initialize telemetry; the guard flushes logs on exit
    let _guard = promo_shared::telemetry::init_telemetry()?;

    info!(env = %config.app.env, "{} starting...", config.app.name);

    // Connect to Database
    let pool = create_pool(&config.database)
        .await
        .context("failed to connect to database")?;
    run_migrations(&pool).await.context("failed to run migrations")?;
    info!("Database connection established, migrations applied.");

    let state = AppState::new(
        Arc::new(PgCompanyRepository::new(pool.clone())),
        Arc::new(PgPromotionRepository::new(pool.clone())),
        Arc::new(pool.clone()),
    );
    let app = build_router(state, Duration::from_secs(config.app.request_timeout_secs));

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received, draining connections...");
}
