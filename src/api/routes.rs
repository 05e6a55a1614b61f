use axum::{Router, routing::get};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    ranking::{get_legend, get_page, get_ranking},
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(get_page))
        .route("/api/ranking", get(get_ranking))
        .route("/api/legend", get(get_legend))
        .with_state(state)
}
