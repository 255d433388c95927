use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::job_status::{JobStatus, ProcessorHealth},
};

const MAX_JOB_ID_LEN: usize = 128;

/// Closed classification of failures talking to the workflow processor.
///
/// Adapters map their transport errors onto these variants so callers can
/// tell "processor down" apart from "no such job" without inspecting
/// library-specific messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProxyError {
    #[error("Workflow processor unavailable")]
    Unavailable,

    #[error("Job not found")]
    NotFound,

    #[error("Workflow processor error: {0}")]
    Unknown(String),
}

impl From<ProxyError> for AppError {
    fn from(err: ProxyError) -> Self {
        match err {
            ProxyError::Unavailable => AppError::Unavailable,
            ProxyError::NotFound => AppError::NotFound,
            ProxyError::Unknown(detail) => AppError::Internal(detail),
        }
    }
}

/// External background processor that runs provisioning jobs.
#[async_trait]
pub trait JobProcessor: Send + Sync {
    async fn job_status(&self, job_id: &str) -> Result<JobStatus, ProxyError>;
    async fn health(&self) -> Result<ProcessorHealth, ProxyError>;
}

#[derive(Clone)]
pub struct WorkflowUseCases {
    processor: Arc<dyn JobProcessor>,
}

impl WorkflowUseCases {
    pub fn new(processor: Arc<dyn JobProcessor>) -> Self {
        Self { processor }
    }

    /// Single attempt; retrying is the poller's business.
    #[instrument(skip(self))]
    pub async fn job_status(&self, job_id: &str) -> AppResult<JobStatus> {
        let job_id = validate_job_id(job_id)?;
        let status = self.processor.job_status(job_id).await?;
        tracing::debug!(state = %status.state, "Fetched job status");
        Ok(status)
    }

    #[instrument(skip(self))]
    pub async fn health(&self) -> AppResult<ProcessorHealth> {
        Ok(self.processor.health().await?)
    }
}

fn validate_job_id(input: &str) -> AppResult<&str> {
    let trimmed = input.trim();
    let is_valid = !trimmed.is_empty()
        && trimmed.len() <= MAX_JOB_ID_LEN
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if is_valid {
        Ok(trimmed)
    } else {
        Err(AppError::InvalidInput(
            "Invalid job id. Expected 1-128 characters of [A-Za-z0-9_-].".into(),
        ))
    }
}
