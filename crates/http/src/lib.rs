//! Brayam HTTP module: typed client for the attendance backend
//!
//! Everything here is client-side; the backend itself is a separate
//! service. The client works on both wasm32 (fetch-backed reqwest) and
//! native targets.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod types;

pub use client::error::ClientError;
pub use client::ApiClient;
pub use config::{api_base_url, is_valid_api_url, validate_environment, DEFAULT_API_BASE_URL};
pub use endpoints::build_api_url;
