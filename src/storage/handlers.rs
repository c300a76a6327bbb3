use axum::{
    Json,
    body::Bytes,
    extract::{Extension, Path},
    http::StatusCode,
};
use std::sync::Arc;

use super::codec;
use super::errors::ApiError;
use super::memory::ItemStore;
use super::types::{Item, ItemId, ItemPayload};

fn parse_id(raw: &str) -> Result<ItemId, ApiError> {
    raw.parse().map_err(|e| {
        tracing::warn!("Failed to parse item id {:?}: {}", raw, e);
        ApiError::InvalidId
    })
}

fn decode_payload(body: &[u8]) -> Result<ItemPayload, ApiError> {
    codec::decode_payload(body).map_err(|e| {
        tracing::warn!("Failed to decode item payload: {}", e);
        ApiError::from(e)
    })
}

pub async fn handle_create_item(
    Extension(store): Extension<Arc<ItemStore>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let payload = decode_payload(&body)?;
    let item = store.create(payload);
    tracing::info!("Created item {}", item.id);
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn handle_list_items(
    Extension(store): Extension<Arc<ItemStore>>,
) -> (StatusCode, Json<Vec<Item>>) {
    (StatusCode::OK, Json(store.list()))
}

pub async fn handle_get_item(
    Extension(store): Extension<Arc<ItemStore>>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let id = parse_id(&id_str)?;
    let item = store.get(id).inspect_err(|e| tracing::debug!("GET: {}", e))?;
    Ok((StatusCode::OK, Json(item)))
}

pub async fn handle_update_item(
    Extension(store): Extension<Arc<ItemStore>>,
    Path(id_str): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let id = parse_id(&id_str)?;
    let payload = decode_payload(&body)?;
    let item = store
        .update(id, payload)
        .inspect_err(|e| tracing::debug!("UPDATE: {}", e))?;
    tracing::info!("Updated item {}", id);
    Ok((StatusCode::OK, Json(item)))
}

pub async fn handle_delete_item(
    Extension(store): Extension<Arc<ItemStore>>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id_str)?;
    store
        .delete(id)
        .inspect_err(|e| tracing::debug!("DELETE: {}", e))?;
    tracing::info!("Deleted item {}", id);
    Ok(StatusCode::NO_CONTENT)
}
