use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header::SET_COOKIE},
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{DateTime, Utc};
use serde::Serialize;
use time::OffsetDateTime;

use crate::{
    adapters::http::{app_state::AppState, guard::CurrentUser},
    app_error::{AppError, AppResult},
    domain::entities::role::Role,
    infra::config::AppConfig,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(me))
        .route("/refresh", post(refresh))
        .route("/logout", post(logout))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MeResponse {
    subject: String,
    role: Role,
    expires_at: Option<DateTime<Utc>>,
}

async fn me(CurrentUser(claims): CurrentUser) -> impl IntoResponse {
    Json(MeResponse {
        subject: claims.sub,
        role: claims.role,
        expires_at: DateTime::from_timestamp(claims.exp, 0),
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshResponse {
    /// For bearer callers that cannot read the cookie.
    token: String,
    expires_at: Option<DateTime<Utc>>,
}

/// Re-issue the caller's session with a fresh expiry.
async fn refresh(
    State(app_state): State<AppState>,
    CurrentUser(claims): CurrentUser,
) -> AppResult<impl IntoResponse> {
    let ttl = app_state.config.session_ttl;
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let token = app_state
        .sessions
        .codec()
        .issue_at(&claims.sub, claims.role, ttl, now)?;

    let mut headers = HeaderMap::new();
    headers.append(
        SET_COOKIE,
        session_cookie(&app_state.config, token.clone(), ttl)?,
    );

    tracing::info!(subject = %claims.sub, "Session refreshed");

    Ok((
        StatusCode::OK,
        headers,
        Json(RefreshResponse {
            token,
            expires_at: DateTime::from_timestamp(now + ttl.whole_seconds(), 0),
        }),
    ))
}

/// Expire the session cookie. Works with or without a valid session.
async fn logout(State(app_state): State<AppState>) -> AppResult<(StatusCode, HeaderMap)> {
    let mut headers = HeaderMap::new();
    headers.append(
        SET_COOKIE,
        session_cookie(&app_state.config, String::new(), time::Duration::seconds(0))?,
    );
    Ok((StatusCode::NO_CONTENT, headers))
}

fn session_cookie(
    config: &AppConfig,
    value: String,
    max_age: time::Duration,
) -> AppResult<HeaderValue> {
    let cookie = Cookie::build((config.session_cookie_name.clone(), value))
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(max_age)
        .build();
    HeaderValue::from_str(&cookie.to_string()).map_err(|e| AppError::Internal(e.to_string()))
}
