//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use secrecy::SecretString;
use time::Duration;

use crate::{
    domain::entities::{
        job_status::{JobState, JobStatus},
        role::Role,
    },
    jwt::TokenCodec,
};

pub const TEST_JWT_SECRET: &str = "test_jwt_secret_for_sessions";
pub const TEST_COOKIE_NAME: &str = "session_token";

/// Codec keyed with [`TEST_JWT_SECRET`] and no leeway.
pub fn test_codec() -> TokenCodec {
    TokenCodec::new(SecretString::new(TEST_JWT_SECRET.into()), 0)
}

/// Valid session token for `subject`, expiring in an hour.
pub fn issue_test_token(subject: &str, role: Role) -> String {
    test_codec()
        .issue(subject, role, Duration::hours(1))
        .expect("test token should be issued")
}

/// Correctly signed token that expired an hour ago.
pub fn expired_token(subject: &str, role: Role) -> String {
    let two_hours_ago = chrono::Utc::now().timestamp() - 7_200;
    test_codec()
        .issue_at(subject, role, Duration::hours(1), two_hours_ago)
        .expect("test token should be issued")
}

/// Create a queued test job with sensible defaults.
pub fn create_test_job(job_id: &str, overrides: impl FnOnce(&mut JobStatus)) -> JobStatus {
    let mut job = JobStatus {
        job_id: job_id.to_string(),
        state: JobState::Queued,
        result: None,
        error: None,
    };
    overrides(&mut job);
    job
}
