//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, the metrics recorder, click worker
//! spawning and the Axum server lifecycle including graceful shutdown.

use crate::config::Config;
use crate::application::click_worker::run_click_worker;
use crate::domain::repositories::{LinkRepository, StatsRepository};
use crate::infrastructure::persistence::{PgLinkRepository, PgStatsRepository};
use crate::routes::app_router;
use crate::state::AppState;
use crate::telemetry;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Opens the PostgreSQL pool using the configured limits.
///
/// # Errors
///
/// Returns an error if the database is unreachable.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(Some(config.idle_timeout()))
        .max_lifetime(Some(config.max_lifetime()))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Schema migrations
/// - Prometheus metrics recorder
/// - Background click worker
/// - Axum HTTP server
///
/// On SIGINT/SIGTERM the server stops accepting connections, finishes
/// in-flight requests, waits for queued clicks to be written and closes the
/// pool.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The metrics recorder cannot be installed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations applied");

    let pool_arc = Arc::new(pool.clone());
    let link_repository: Arc<dyn LinkRepository> =
        Arc::new(PgLinkRepository::new(pool_arc.clone()));
    let stats_repository: Arc<dyn StatsRepository> =
        Arc::new(PgStatsRepository::new(pool_arc));

    let metrics_handle = telemetry::setup_metrics_recorder()?;

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    let state = AppState::new(
        link_repository,
        stats_repository,
        config.stats_timezone,
        click_tx,
    );

    let click_worker = tokio::spawn(run_click_worker(
        click_rx,
        state.stats_service.clone(),
        config.click_worker_concurrency,
    ));
    tracing::info!("Click worker started");

    let app = app_router(state, metrics_handle);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped, draining click queue");
    if let Err(e) = click_worker.await {
        tracing::error!("Click worker panicked: {}", e);
    }

    pool.close().await;
    tracing::info!("Database pool closed");

    Ok(())
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
