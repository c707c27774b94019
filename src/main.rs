//! Bank Dashboard - Main Application Entry Point
//!
//! A server-rendered dashboard over a PostgreSQL banking schema. Three pages:
//! a funds-transfer form with live balances, the balance audit trail, and the
//! schema change log. The transactional transfer logic and both logs live in
//! the database (a stored procedure and triggers, created by the migrations);
//! the application renders pages, runs read-only queries, and issues a single
//! `CALL` per transfer.
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create the database connection pool
//! 3. Run database migrations
//! 4. Build the HTTP router
//! 5. Start the server on the configured port

mod config;
mod db;
mod endpoints;
mod error;
mod handlers;
mod models;
mod services;
mod views;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG, defaults to "info"
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let app = Router::new()
        .route(endpoints::TRANSFER_VIEW, get(handlers::transfer::transfer_page))
        .route(endpoints::TRANSFER, post(handlers::transfer::submit_transfer))
        .route(endpoints::AUDIT_LOG_VIEW, get(handlers::audit::audit_log_page))
        .route(
            endpoints::SCHEMA_LOG_VIEW,
            get(handlers::schema_log::schema_log_page),
        )
        .route(endpoints::HEALTH, get(handlers::health::health_check))
        // Request tracing for observability
        .layer(TraceLayer::new_for_http())
        // Share the database pool with all handlers via State extraction
        .with_state(pool);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
