//! Browser entry points.
//!
//! Each handler answers with the shell payload the front end renders, or with
//! the redirect the route guard chose for the request.

use axum::{
    Json, Router,
    extract::{OriginalUri, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;

use crate::{
    adapters::http::{app_state::AppState, guard::enforce},
    domain::entities::{identity::Identity, role::Role},
    guard::{GuardContext, Requirement},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/waitlist", get(waitlist))
        .route("/signup", get(signup))
        .route("/dashboard", get(dashboard))
        .route("/dashboard/{*rest}", get(dashboard))
        .route("/admin", get(admin))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageVariant {
    Home,
    ComingSoon,
    Waitlist,
    Onboarding,
    Dashboard,
    Admin,
}

#[derive(Serialize)]
struct PageView {
    variant: PageVariant,
    live: bool,
    subject: Option<String>,
    role: Option<Role>,
}

impl PageView {
    fn new(variant: PageVariant, live: bool, identity: &Identity) -> Self {
        Self {
            variant,
            live,
            subject: identity.subject().map(str::to_string),
            role: identity.role(),
        }
    }
}

fn render_page(
    app_state: &AppState,
    headers: &HeaderMap,
    uri: &OriginalUri,
    requirement: Requirement,
    variant: PageVariant,
) -> Response {
    let route = uri
        .0
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.0.path());
    match enforce(app_state, headers, route, requirement, GuardContext::Page) {
        Ok(identity) => {
            Json(PageView::new(variant, app_state.guard.is_live(), &identity)).into_response()
        }
        Err(response) => response,
    }
}

async fn home(
    State(app_state): State<AppState>,
    uri: OriginalUri,
    headers: HeaderMap,
) -> Response {
    let variant = if app_state.guard.is_live() {
        PageVariant::Home
    } else {
        PageVariant::ComingSoon
    };
    render_page(&app_state, &headers, &uri, Requirement::Anyone, variant)
}

/// Redirect target of the gate itself, so it is never guarded.
async fn waitlist(State(app_state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let identity = app_state.sessions.resolve(&headers);
    Json(PageView::new(
        PageVariant::Waitlist,
        app_state.guard.is_live(),
        &identity,
    ))
}

async fn signup(
    State(app_state): State<AppState>,
    uri: OriginalUri,
    headers: HeaderMap,
) -> Response {
    render_page(
        &app_state,
        &headers,
        &uri,
        Requirement::Anyone,
        PageVariant::Onboarding,
    )
}

async fn dashboard(
    State(app_state): State<AppState>,
    uri: OriginalUri,
    headers: HeaderMap,
) -> Response {
    render_page(
        &app_state,
        &headers,
        &uri,
        Requirement::Authenticated,
        PageVariant::Dashboard,
    )
}

async fn admin(
    State(app_state): State<AppState>,
    uri: OriginalUri,
    headers: HeaderMap,
) -> Response {
    render_page(
        &app_state,
        &headers,
        &uri,
        Requirement::Admin,
        PageVariant::Admin,
    )
}
