//! HTTP client for the background workflow processor.
//!
//! Every call is a single bounded attempt. Transport failures and upstream
//! statuses are folded into [`ProxyError`] here, so nothing above this module
//! sees a `reqwest` error. Failures are logged at debug here; the HTTP
//! error response logs them once at warn or error.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::{
    domain::entities::job_status::{JobState, JobStatus, ProcessorHealth},
    infra::http_client::try_build_client,
    use_cases::workflow::{JobProcessor, ProxyError},
};

/// Header carrying the shared secret the processor expects.
pub const SECRET_HEADER: &str = "x-workflow-secret";

#[derive(Clone)]
pub struct HttpJobProcessor {
    client: Client,
    base_url: Url,
    secret: SecretString,
}

impl HttpJobProcessor {
    pub fn new(base_url: Url, secret: SecretString, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: try_build_client(timeout)?,
            base_url,
            secret,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ProxyError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ProxyError::Unknown(format!("unusable workflow base url {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, ProxyError> {
        let response = self
            .client
            .get(url)
            .header(SECRET_HEADER, self.secret.expose_secret())
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(classify_status(status))
        }
    }
}

/// Job payload as the processor sends it. The id may be omitted.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobStatusBody {
    #[serde(default, alias = "job_id", alias = "id")]
    job_id: Option<String>,
    #[serde(alias = "status")]
    state: JobState,
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

#[async_trait]
impl JobProcessor for HttpJobProcessor {
    async fn job_status(&self, job_id: &str) -> Result<JobStatus, ProxyError> {
        let url = self.endpoint(&["job-status", job_id])?;
        let body: JobStatusBody = self
            .get(url)
            .await?
            .json()
            .await
            .map_err(classify_transport)?;

        Ok(JobStatus {
            job_id: body.job_id.unwrap_or_else(|| job_id.to_string()),
            state: body.state,
            result: body.result,
            error: body.error,
        })
    }

    async fn health(&self) -> Result<ProcessorHealth, ProxyError> {
        let url = self.endpoint(&["health"])?;
        let bytes = self
            .get(url)
            .await?
            .bytes()
            .await
            .map_err(classify_transport)?;

        // Any 2xx is healthy; the body is passed along only when it is JSON.
        let detail = serde_json::from_slice(&bytes).ok();
        Ok(ProcessorHealth::healthy(detail))
    }
}

fn classify_transport(err: reqwest::Error) -> ProxyError {
    if err.is_connect() || err.is_timeout() {
        tracing::debug!(error = %err, "Workflow processor unreachable");
        ProxyError::Unavailable
    } else {
        tracing::debug!(error = %err, "Workflow processor call failed");
        ProxyError::Unknown(err.to_string())
    }
}

fn classify_status(status: StatusCode) -> ProxyError {
    match status {
        StatusCode::NOT_FOUND => ProxyError::NotFound,
        StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
            tracing::debug!(%status, "Workflow processor unavailable");
            ProxyError::Unavailable
        }
        _ => {
            tracing::debug!(%status, "Unexpected workflow processor status");
            ProxyError::Unknown(format!("unexpected upstream status {status}"))
        }
    }
}
