use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use serde::Serialize;

use crate::adapters::http::{app_state::AppState, guard::AdminUser};

pub fn router() -> Router<AppState> {
    Router::new().route("/launch", get(get_launch))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LaunchResponse {
    live: bool,
    gated_entries: Vec<String>,
}

async fn get_launch(
    State(app_state): State<AppState>,
    AdminUser(claims): AdminUser,
) -> impl IntoResponse {
    tracing::debug!(subject = %claims.sub, "Launch state requested");
    let gate = app_state.guard.gate();
    Json(LaunchResponse {
        live: gate.is_live(),
        gated_entries: gate.gated_entries().to_vec(),
    })
}
