//! In-Memory Item Store Library
//!
//! This library crate defines the modules behind the `item-store` binary (`main.rs`).
//!
//! ## Modules
//! - **`storage`**: The concurrency-safe `ItemStore` plus the HTTP handlers, DTOs and
//!   error types that expose it.
//! - **`server`**: Router construction and the serve loop with graceful shutdown.
//! - **`config`**: Command-line / environment configuration.

pub mod config;
pub mod server;
pub mod storage;
