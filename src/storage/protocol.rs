//! Item Store HTTP Protocol
//!
//! Defines the API endpoints and the Data Transfer Objects (DTOs) that are not
//! items themselves. Items travel as plain JSON objects (`{"id", "name", "value"}`).

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Collection endpoint: `POST` creates, `GET` lists.
pub const ENDPOINT_ITEMS: &str = "/items";
/// Single item endpoint: `GET` reads, `PUT` replaces, `DELETE` removes.
pub const ENDPOINT_ITEM: &str = "/items/:id";

// --- Data Transfer Objects ---

/// Body returned with every 4xx response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable reason, e.g. `"Item not found"`.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
