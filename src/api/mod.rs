//! Backend client for address persistence.
//!
//! The forms never await: take a `PendingSave` with `confirm()`, send it
//! with [`ApiClient`], then hand the answer to `settle()`.

mod client;
mod config;

pub use client::ApiClient;
pub use config::ApiConfig;
