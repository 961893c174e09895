use axum::Router;

pub mod analytics;
pub mod inventory;
pub mod settings;
pub mod system;

/// Router for the three dashboard views.
pub fn router() -> Router {
    Router::new()
        .nest("/inventory", inventory::router())
        .nest("/analytics", analytics::router())
        .nest("/settings", settings::router())
}
