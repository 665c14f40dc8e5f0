use clap::Parser;
use std::sync::Arc;
use submission_search::config::ServerConfig;
use submission_search::server::{build_router, AppState};
use submission_search::storage::{MemoryRecordStore, RecordStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();

    // 1. Record store:
    let store: Arc<dyn RecordStore> = if config.no_seed {
        Arc::new(MemoryRecordStore::new())
    } else {
        Arc::new(MemoryRecordStore::with_sample_records())
    };
    tracing::info!("Record store ready with {} records", store.len());

    // 2. HTTP Router:
    let app = build_router(&config, AppState::new(store));

    if !config.static_dir.exists() {
        tracing::warn!(
            "Static directory {} does not exist; front-end routes will return 404",
            config.static_dir.display()
        );
    }

    // 3. Start HTTP server:
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server is running on {}", listener.local_addr()?);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app).await?;

    Ok(())
}
