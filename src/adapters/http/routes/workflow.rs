use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};

use crate::{
    adapters::http::{app_state::AppState, guard::CurrentUser},
    app_error::AppResult,
};

/// Proxy for the external provisioning processor, polled by the dashboard.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/status/{job_id}", get(job_status))
}

async fn health(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let health = app_state.workflow_use_cases.health().await?;
    Ok(Json(health))
}

async fn job_status(
    State(app_state): State<AppState>,
    CurrentUser(claims): CurrentUser,
    Path(job_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    tracing::debug!(subject = %claims.sub, %job_id, "Polling job status");
    let status = app_state.workflow_use_cases.job_status(&job_id).await?;
    Ok(Json(status))
}
