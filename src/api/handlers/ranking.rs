use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
};
use chrono::Utc;
use log::error;
use std::sync::Arc;

use crate::api::models::{LegendResponse, RankingResponse};
use crate::reliability;
use crate::services::render::RenderService;

use super::AppState;

/// The leaderboard page. Every request is a fresh render cycle, so a
/// sheet edit is visible on the next reload.
pub async fn get_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let service = RenderService::new(state.config.clone());
    match service.render_html() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Render cycle failed: {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Render error: {e}")).into_response()
        }
    }
}

/// The presented leaderboard as JSON, for non-HTML frontends.
pub async fn get_ranking(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let service = RenderService::new(state.config.clone());
    match service.build() {
        Ok(board) => Json(RankingResponse {
            generated_at: Utc::now().to_rfc3339(),
            total: board.rows.len(),
            rows: board.rows,
            podium: board.podium,
        })
        .into_response(),
        Err(e) => {
            error!("Render cycle failed: {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Render error: {e}")).into_response()
        }
    }
}

/// The static reliability legend.
pub async fn get_legend() -> impl IntoResponse {
    Json(LegendResponse {
        buckets: reliability::legend(),
    })
}
