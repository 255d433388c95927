use crate::{
    adapters::{http::app_state::AppState, workflow::HttpJobProcessor},
    domain::entities::launch::LaunchGate,
    guard::RouteGuard,
    infra::{config::AppConfig, error::InfraError},
    jwt::TokenCodec,
    session::SessionResolver,
    use_cases::workflow::WorkflowUseCases,
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Wire the process-wide state from an already loaded config.
pub fn build_app_state(config: AppConfig) -> Result<AppState, InfraError> {
    let codec = TokenCodec::new(config.jwt_secret.clone(), config.session_leeway_secs);
    let sessions = SessionResolver::new(codec, config.session_cookie_name.clone());

    let gate = LaunchGate::from_list(config.live_mode, &config.gated_entries);
    tracing::info!(
        live = gate.is_live(),
        gated = ?gate.gated_entries(),
        "Launch mode resolved"
    );

    let processor = Arc::new(HttpJobProcessor::new(
        config.workflow_base_url.clone(),
        config.workflow_secret.clone(),
        config.workflow_timeout,
    )?);

    Ok(AppState {
        config: Arc::new(config),
        sessions: Arc::new(sessions),
        guard: Arc::new(RouteGuard::new(gate)),
        workflow_use_cases: Arc::new(WorkflowUseCases::new(processor)),
    })
}

pub fn init_tracing(log_file: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "estatekit=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don’t show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs), skipped when the file cannot be created
    let (file, file_error) = match File::create(log_file) {
        Ok(file) => (Some(file), None),
        Err(err) => (None, Some(err)),
    };
    let json_layer = file.map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    if let Some(err) = file_error {
        tracing::warn!(error = %err, log_file, "Cannot create log file, logging to console only");
    }
}
