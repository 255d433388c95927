//! HTTP client factory with consistent timeout configuration.
//!
//! Outbound clients should be built here rather than constructing
//! `reqwest::Client` directly, so every call has a bounded duration.

use reqwest::Client;
use std::time::Duration;

/// Default connect timeout (TCP handshake + TLS).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Build an HTTP client whose requests never outlive `timeout`.
///
/// The connect timeout is the smaller of `timeout` and [`DEFAULT_CONNECT_TIMEOUT`].
pub fn try_build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(timeout.min(DEFAULT_CONNECT_TIMEOUT))
        .timeout(timeout)
        .build()
}
