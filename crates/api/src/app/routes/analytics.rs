use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Rows in the "most expensive assets" table unless `?n=` says otherwise.
pub const DEFAULT_TOP_N: usize = 5;

pub fn router() -> Router {
    Router::new()
        .route("/categories", get(get_category_values))
        .route("/top", get(get_top_assets))
}

pub async fn get_category_values(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let totals = match services.by_category() {
        Ok(t) => t,
        Err(e) => return errors::service_error_to_response(e),
    };

    let categories: Vec<dto::CategoryValue> = totals
        .sorted_desc()
        .into_iter()
        .map(|(category, total_value)| dto::CategoryValue { category, total_value })
        .collect();

    (
        StatusCode::OK,
        Json(serde_json::json!({ "categories": categories })),
    )
        .into_response()
}

pub async fn get_top_assets(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::TopParams>,
) -> axum::response::Response {
    let n = params.n.unwrap_or(DEFAULT_TOP_N);
    let top = match services.top_by_price(n) {
        Ok(t) => t,
        Err(e) => return errors::service_error_to_response(e),
    };

    let assets: Vec<dto::TopAsset> = top.into_iter().map(dto::TopAsset::from).collect();
    (StatusCode::OK, Json(serde_json::json!({ "assets": assets }))).into_response()
}
