//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared inventory service and how it is opened
//! - `routes/`: HTTP routes + handlers (one file per dashboard view)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use electrovault_infra::StorageError;

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Opens the backing file named in `config`. An unreadable file starts the
/// service empty with a load warning instead of failing.
pub fn build_app(config: &ApiConfig) -> Result<Router, StorageError> {
    let services = services::open_file_services(&config.data_file)?;
    Ok(router(Arc::new(services)))
}

/// Router over an already-opened service.
pub fn router(services: Arc<AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
}
