use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use electrovault_infra::RecordStore;
use electrovault_inventory::export_file_name;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/export", get(export_inventory))
        .route("/purge", post(purge_inventory))
        .route("/status", get(get_status))
}

/// Download the inventory as a JSON file.
pub async fn export_inventory(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let body = match services.export_json() {
        Ok(b) => b,
        Err(e) => return errors::service_error_to_response(e),
    };

    let disposition = format!("attachment; filename=\"{}\"", export_file_name(Utc::now()));
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response()
}

pub async fn purge_inventory(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.purge() {
        Ok(purged) => (StatusCode::OK, Json(serde_json::json!({ "purged": purged }))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_status(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let records = match services.snapshot() {
        Ok(inv) => inv.len(),
        Err(e) => return errors::service_error_to_response(e),
    };

    let status = dto::StatusResponse {
        location: services.store().location(),
        records,
        load_warning: services.load_warning().map(str::to_string),
    };
    (StatusCode::OK, Json(status)).into_response()
}
