pub mod admin;
pub mod auth;
pub mod pages;
pub mod session;
pub mod workflow;

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use serde::Serialize;

use crate::adapters::http::app_state::AppState;

/// API routes, mounted under `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(session::router())
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
        .nest("/workflow", workflow::router())
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    live: bool,
}

async fn health(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        live: app_state.guard.is_live(),
    })
}
