//! HTTP Server
//!
//! Wires the item routes to a shared `ItemStore` and runs them on a TCP listener.

use axum::{Extension, Router, routing::get};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::storage::handlers::{
    handle_create_item, handle_delete_item, handle_get_item, handle_list_items,
    handle_update_item,
};
use crate::storage::memory::ItemStore;
use crate::storage::protocol::{ENDPOINT_ITEM, ENDPOINT_ITEMS};

/// Builds the application router around an existing store.
pub fn build_router(store: Arc<ItemStore>) -> Router {
    Router::new()
        .route(ENDPOINT_ITEMS, get(handle_list_items).post(handle_create_item))
        .route(
            ENDPOINT_ITEM,
            get(handle_get_item)
                .put(handle_update_item)
                .delete(handle_delete_item),
        )
        .layer(Extension(store))
        .layer(TraceLayer::new_for_http())
}

/// Serves `store` on `listener` until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    store: Arc<ItemStore>,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let app = build_router(store);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Resolves on Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
