use axum::{Json, Router, extract::State, http::HeaderMap, response::IntoResponse, routing::get};
use serde::Serialize;

use crate::{adapters::http::app_state::AppState, domain::entities::role::Role};

pub fn router() -> Router<AppState> {
    Router::new().route("/session", get(get_session))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    authenticated: bool,
    subject: Option<String>,
    role: Option<Role>,
    live: bool,
}

/// Identity probe for client-side guards. Never fails: a missing or bad
/// session simply reports `authenticated: false`.
async fn get_session(State(app_state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let identity = app_state.sessions.resolve(&headers);
    Json(SessionResponse {
        authenticated: identity.is_authenticated(),
        subject: identity.subject().map(str::to_string),
        role: identity.role(),
        live: app_state.guard.is_live(),
    })
}
