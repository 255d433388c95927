//! Stub implementation of the workflow processor port.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    domain::entities::job_status::{JobStatus, ProcessorHealth},
    use_cases::workflow::{JobProcessor, ProxyError},
};

// ============================================================================
// StubJobProcessor
// ============================================================================

/// In-memory job processor. Unknown job ids answer `NotFound`; a configured
/// failure is returned from every call instead.
#[derive(Default)]
pub struct StubJobProcessor {
    pub jobs: Mutex<HashMap<String, JobStatus>>,
    failure: Option<ProxyError>,
    status_calls: AtomicUsize,
}

impl StubJobProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_job(self, job: JobStatus) -> Self {
        self.jobs.lock().unwrap().insert(job.job_id.clone(), job);
        self
    }

    pub fn failing_with(mut self, error: ProxyError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Number of `job_status` calls that reached the processor.
    pub fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JobProcessor for StubJobProcessor {
    async fn job_status(&self, job_id: &str) -> Result<JobStatus, ProxyError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.jobs
            .lock()
            .unwrap()
            .get(job_id)
            .cloned()
            .ok_or(ProxyError::NotFound)
    }

    async fn health(&self) -> Result<ProcessorHealth, ProxyError> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(ProcessorHealth::healthy(None)),
        }
    }
}
