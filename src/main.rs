use clap::Parser;
use item_store::config::ServerConfig;
use item_store::server::{serve, shutdown_signal};
use item_store::storage::memory::ItemStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 1. Storage:
    let store = Arc::new(ItemStore::new());

    // 2. HTTP server:
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("HTTP server listening on {}", listener.local_addr()?);
    tracing::info!("Press Ctrl+C to shutdown");

    serve(listener, store.clone(), shutdown_signal()).await?;

    tracing::info!("Server stopped with {} items in memory", store.len());
    Ok(())
}
