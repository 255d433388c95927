use axum::{Router, http};
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::adapters::{self, http::app_state::AppState};

/// Full service router: browser entry points at the root, JSON API under `/api`.
///
/// Tracing must be initialized by the caller.
pub fn create_app(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(app_state.config.cors_origin.clone())
        .allow_methods([http::Method::GET, http::Method::POST])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true);

    Router::new()
        .nest("/api", adapters::http::routes::router())
        .merge(adapters::http::routes::pages::router())
        .with_state(app_state)
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            http::header::X_CONTENT_TYPE_OPTIONS,
            http::HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            http::header::X_FRAME_OPTIONS,
            http::HeaderValue::from_static("DENY"),
        ))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &http::Request<_>| {
                let request_id = Uuid::new_v4();
                tracing::info_span!(
                    "http-request",
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                    request_id = %request_id
                )
            }),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode, header::COOKIE};
    use axum_test::TestServer;
    use serde_json::Value;

    use crate::{
        domain::entities::role::Role,
        test_utils::{TEST_COOKIE_NAME, TestAppStateBuilder, issue_test_token},
    };

    fn server(live: bool) -> TestServer {
        let app_state = TestAppStateBuilder::new().live(live).build();
        TestServer::new(create_app(app_state)).unwrap()
    }

    #[tokio::test]
    async fn test_security_headers_are_set() {
        let response = server(true).get("/api/health").await;

        response.assert_status_ok();
        assert_eq!(response.header("x-content-type-options"), "nosniff");
        assert_eq!(response.header("x-frame-options"), "DENY");
    }

    #[tokio::test]
    async fn test_nested_api_rejects_without_session() {
        let response = server(true).get("/api/workflow/status/job-1").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_pages_and_api_share_the_gate() {
        let server = server(false);

        let page = server.get("/dashboard").await;
        page.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(page.header("location"), "/waitlist");

        let token = issue_test_token("u1", Role::User);
        let session = server
            .get("/api/session")
            .add_header(
                COOKIE,
                HeaderValue::from_str(&format!("{TEST_COOKIE_NAME}={token}")).unwrap(),
            )
            .await;
        session.assert_status_ok();
        let body = session.json::<Value>();
        assert_eq!(body["authenticated"], true);
        assert_eq!(body["live"], false);
    }
}
