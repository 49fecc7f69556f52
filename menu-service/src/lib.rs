pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use service_core::axum::{
    middleware::from_fn,
    routing::{get, put},
    Router,
};
use service_core::middleware::metrics::metrics_middleware;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::services::MenuStore;

/// State shared by every handler. The store is injected so that tests can
/// swap MongoDB for [`services::MockMenuStore`].
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MenuStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn MenuStore>) -> Self {
        Self { store }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics::metrics))
        .route(
            "/menu/:id",
            put(handlers::update_menu_item).delete(handlers::delete_menu_item),
        )
        .with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}
