use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    guard::RouteGuard, infra::config::AppConfig, session::SessionResolver,
    use_cases::workflow::WorkflowUseCases,
};

/// Read-only per-process context handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sessions: Arc<SessionResolver>,
    pub guard: Arc<RouteGuard>,
    pub workflow_use_cases: Arc<WorkflowUseCases>,
}

impl FromRef<AppState> for Arc<WorkflowUseCases> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.workflow_use_cases.clone()
    }
}

impl FromRef<AppState> for Arc<SessionResolver> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
