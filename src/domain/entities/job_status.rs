use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a provisioning job, as reported by the workflow processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    #[serde(alias = "pending", alias = "waiting")]
    Queued,
    #[serde(alias = "processing", alias = "active")]
    Running,
    #[serde(alias = "completed", alias = "success")]
    Succeeded,
    #[serde(alias = "error")]
    Failed,
}

impl JobState {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobState::Queued => "queued",
            JobState::Running => "running",
            JobState::Succeeded => "succeeded",
            JobState::Failed => "failed",
        }
    }

    /// Pollers stop once a job reaches a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Succeeded | JobState::Failed)
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read-only view of a job owned by the external processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
    #[serde(alias = "job_id", alias = "id")]
    pub job_id: String,
    #[serde(alias = "status")]
    pub state: JobState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessorHealth {
    pub status: &'static str,
    pub checked_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

impl ProcessorHealth {
    pub fn healthy(detail: Option<serde_json::Value>) -> Self {
        Self {
            status: "healthy",
            checked_at: Utc::now(),
            detail,
        }
    }
}
