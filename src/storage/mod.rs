//! Item Storage Module
//!
//! Implements the in-memory item store and its HTTP surface.
//!
//! ## Core Concepts
//! - **Handles**: Every item gets an integer `id` from a monotonic counter. Handles are never reused.
//! - **Locking**: One mutex guards the item map and the counter together. Every operation,
//!   reads included, runs inside that critical section, so readers never see a half-applied write.
//! - **Access**: `ItemStore` is created once by the server and shared with handlers through `Arc`.
//!
//! ## Submodules
//! - **`memory`**: The `ItemStore` itself (create, list, get, update, delete).
//! - **`handlers`**: Axum handlers translating HTTP requests into store calls.
//! - **`codec`**: Lenient JSON decoding of request bodies into `ItemPayload`.
//! - **`protocol`**: Endpoint paths and response DTOs.
//! - **`types`**: `Item` and the client-supplied `ItemPayload`.
//! - **`errors`**: Store and API error types.

pub mod codec;
pub mod errors;
pub mod handlers;
pub mod memory;
pub mod protocol;
pub mod types;
