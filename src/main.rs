//! Orderdesk server binary
//!
//! Loads the YAML configuration given as the first argument (or defaults),
//! picks the storage backend, optionally seeds sample data, and serves the
//! REST API until Ctrl+C or SIGTERM.

use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;

use orderdesk::config::AppConfig;
use orderdesk::seed::seed_sample_orders;
use orderdesk::server::{build_router, AppState};
use orderdesk::service::OrderService;
use orderdesk::storage::{InMemoryOrderStore, OrderStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orderdesk=info,tower_http=info".into()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::from_yaml_file(&path)?,
        None => AppConfig::default(),
    };

    let store = build_store(&config).await?;
    let service = OrderService::new(store);

    if config.seed_sample_data {
        seed_sample_orders(&service).await?;
    }

    let app = build_router(AppState::new(service));
    let listener = TcpListener::bind(&config.server.bind_addr).await?;

    tracing::info!("Server listening on {}", config.server.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

#[cfg(feature = "postgres")]
async fn build_store(config: &AppConfig) -> Result<Arc<dyn OrderStore>> {
    use orderdesk::storage::{ensure_schema, PostgresOrderStore};
    use sqlx::postgres::PgPoolOptions;

    match &config.database {
        Some(db) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&db.url)
                .await?;
            ensure_schema(&pool).await?;
            tracing::info!("Connected to Postgres");
            Ok(Arc::new(PostgresOrderStore::new(pool)))
        }
        None => Ok(Arc::new(InMemoryOrderStore::new())),
    }
}

#[cfg(not(feature = "postgres"))]
async fn build_store(config: &AppConfig) -> Result<Arc<dyn OrderStore>> {
    if config.database.is_some() {
        tracing::warn!(
            "Configuration has a database section, but this build lacks the 'postgres' feature; using the in-memory store"
        );
    }
    Ok(Arc::new(InMemoryOrderStore::new()))
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
