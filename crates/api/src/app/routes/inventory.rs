use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use chrono::Utc;

use electrovault_core::RecordId;
use electrovault_inventory::{AddRecord, Category, Price, Quantity};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/:id", delete(delete_item))
        .route("/stats", get(get_stats))
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::SearchParams>,
) -> axum::response::Response {
    let query = params.q.unwrap_or_default();
    match services.search(&query) {
        Ok(items) => (StatusCode::OK, Json(dto::ItemList::from(items))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let category = match body.category.as_deref() {
        None => Category::Other,
        Some(raw) => match raw.parse::<Category>() {
            Ok(c) => c,
            Err(e) => return errors::service_error_to_response(e.into()),
        },
    };

    let cmd = AddRecord {
        name: body.name,
        category,
        price: Price::coerce(&body.price),
        qty: Quantity::coerce(&body.qty),
        occurred_at: Utc::now(),
    };

    match services.add(cmd) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::service_error_to_response(e.into()),
    };

    match services.delete(id) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_stats(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.stats() {
        Ok(stats) => (StatusCode::OK, Json(dto::StatsResponse::from(stats))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
