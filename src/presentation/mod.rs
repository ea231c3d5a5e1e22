// Presentation layer - HTTP routes and handlers
pub mod app_state;
pub mod handlers;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    fold_graph, fold_schema, get_category_fold, health_check, list_categories,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/categories", get(list_categories))
        .route("/categories/:name/fold", get(get_category_fold))
        .route("/schema/fold", get(fold_schema))
        .route("/graphs/fold", post(fold_graph))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
