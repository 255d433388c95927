//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! backed by the test token secret and a stub workflow processor.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;
use time::Duration;
use url::Url;

use crate::{
    adapters::http::app_state::AppState,
    domain::entities::launch::{DEFAULT_GATED_ENTRIES, LaunchGate},
    guard::RouteGuard,
    infra::config::{AppConfig, RedirectTargets},
    session::SessionResolver,
    test_utils::{StubJobProcessor, TEST_COOKIE_NAME, TEST_JWT_SECRET, test_codec},
    use_cases::workflow::{JobProcessor, WorkflowUseCases},
};

// ============================================================================
// TestAppStateBuilder
// ============================================================================

/// Builder for creating `AppState` with stubs for testing.
///
/// # Example
///
/// ```ignore
/// let app_state = TestAppStateBuilder::new()
///     .live(false)
///     .gated_entries("/signup,/dashboard,/admin")
///     .with_processor(Arc::new(StubJobProcessor::new()))
///     .build();
/// ```
pub struct TestAppStateBuilder {
    live: bool,
    gated_entries: String,
    processor: Option<Arc<dyn JobProcessor>>,
}

impl TestAppStateBuilder {
    /// Live mode with the default gated entries and an empty stub processor.
    pub fn new() -> Self {
        Self {
            live: true,
            gated_entries: DEFAULT_GATED_ENTRIES.to_string(),
            processor: None,
        }
    }

    pub fn live(mut self, live: bool) -> Self {
        self.live = live;
        self
    }

    pub fn gated_entries(mut self, entries: &str) -> Self {
        self.gated_entries = entries.to_string();
        self
    }

    /// Set a custom workflow processor.
    pub fn with_processor(mut self, processor: Arc<dyn JobProcessor>) -> Self {
        self.processor = Some(processor);
        self
    }

    /// Build the AppState with all configured stubs.
    pub fn build(self) -> AppState {
        let processor: Arc<dyn JobProcessor> = self
            .processor
            .unwrap_or_else(|| Arc::new(StubJobProcessor::new()));

        // Create minimal config for testing
        let config = Arc::new(AppConfig {
            jwt_secret: SecretString::new(TEST_JWT_SECRET.into()),
            session_cookie_name: TEST_COOKIE_NAME.to_string(),
            session_ttl: Duration::hours(1),
            session_leeway_secs: 0,
            cookie_secure: false,
            live_mode: self.live,
            gated_entries: self.gated_entries.clone(),
            redirects: RedirectTargets::default(),
            workflow_base_url: Url::parse("http://127.0.0.1:8787").unwrap(),
            workflow_secret: SecretString::new("test_workflow_secret".into()),
            workflow_timeout: std::time::Duration::from_secs(1),
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
            bind_addr: "127.0.0.1:3001".parse::<SocketAddr>().unwrap(),
            log_file: "test.log".to_string(),
        });

        let gate = LaunchGate::from_list(self.live, &self.gated_entries);

        AppState {
            config,
            sessions: Arc::new(SessionResolver::new(test_codec(), TEST_COOKIE_NAME)),
            guard: Arc::new(RouteGuard::new(gate)),
            workflow_use_cases: Arc::new(WorkflowUseCases::new(processor)),
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
