//! HTTP rendering of route guard decisions.
//!
//! Page handlers call [`enforce`] with `GuardContext::Page` and get redirects;
//! API handlers take a [`CurrentUser`] or [`AdminUser`] extractor and get 401s.

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::{HeaderMap, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use url::form_urlencoded;

use crate::{
    adapters::http::app_state::AppState,
    app_error::AppError,
    domain::entities::identity::{Identity, SessionClaims},
    guard::{Decision, GuardContext, Requirement},
    infra::config::RedirectTargets,
};

/// Resolve the session and run the guard for `route` (path plus optional query).
///
/// Returns the identity when allowed, otherwise the response to send back.
pub fn enforce(
    app_state: &AppState,
    headers: &HeaderMap,
    route: &str,
    requirement: Requirement,
    context: GuardContext,
) -> Result<Identity, Response> {
    let identity = app_state.sessions.resolve(headers);
    let decision = app_state
        .guard
        .authorize(&identity, requirement, context, route);

    if decision.is_allowed() {
        return Ok(identity);
    }

    tracing::debug!(
        route,
        ?requirement,
        ?context,
        ?decision,
        authenticated = identity.is_authenticated(),
        "Route guard denied request"
    );
    Err(render(decision, route, &app_state.config.redirects))
}

fn render(decision: Decision, route: &str, targets: &RedirectTargets) -> Response {
    match decision {
        Decision::RedirectToLogin => Redirect::to(&login_location(&targets.login, route)).into_response(),
        Decision::RedirectToWaitlist => Redirect::to(&targets.waitlist).into_response(),
        Decision::RedirectToUnauthorized => Redirect::to(&targets.unauthorized).into_response(),
        Decision::Reject => AppError::Unauthorized.into_response(),
        // Callers only render denials.
        Decision::Allow => AppError::Internal("rendered an allow decision".into()).into_response(),
    }
}

fn login_location(login: &str, route: &str) -> String {
    let next: String = form_urlencoded::byte_serialize(route.as_bytes()).collect();
    let separator = if login.contains('?') { '&' } else { '?' };
    format!("{login}{separator}next={next}")
}

/// Path and query as the client sent them, before any `nest` prefix stripping.
fn original_route(parts: &Parts) -> String {
    let uri = parts
        .extensions
        .get::<OriginalUri>()
        .map(|original| &original.0)
        .unwrap_or(&parts.uri);
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}

fn claims_of(identity: Identity) -> Result<SessionClaims, Response> {
    match identity {
        Identity::Authenticated(claims) => Ok(claims),
        Identity::Unauthenticated => Err(AppError::Unauthorized.into_response()),
    }
}

/// Any signed-in caller of an API route.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionClaims);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let route = original_route(parts);
        let identity = enforce(
            state,
            &parts.headers,
            &route,
            Requirement::Authenticated,
            GuardContext::Api,
        )?;
        claims_of(identity).map(CurrentUser)
    }
}

/// Signed-in admin caller of an API route.
#[derive(Debug, Clone)]
pub struct AdminUser(pub SessionClaims);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let route = original_route(parts);
        let identity = enforce(
            state,
            &parts.headers,
            &route,
            Requirement::Admin,
            GuardContext::Api,
        )?;
        claims_of(identity).map(AdminUser)
    }
}
