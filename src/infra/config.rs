use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use time::Duration;
use url::Url;

use crate::domain::entities::launch::DEFAULT_GATED_ENTRIES;

/// Where the guard sends browsers it turns away.
#[derive(Debug, Clone)]
pub struct RedirectTargets {
    pub login: String,
    pub waitlist: String,
    pub unauthorized: String,
}

impl Default for RedirectTargets {
    fn default() -> Self {
        Self {
            login: "/login".to_string(),
            waitlist: "/waitlist".to_string(),
            unauthorized: "/unauthorized".to_string(),
        }
    }
}

pub struct AppConfig {
    pub jwt_secret: SecretString,
    pub session_cookie_name: String,
    /// Lifetime of tokens minted by the refresh endpoint.
    pub session_ttl: Duration,
    pub session_leeway_secs: u64,
    /// Set `Secure` on session cookies. Disable only for plain-http local dev.
    pub cookie_secure: bool,
    /// Live (full app) or pre-launch (waitlist only). Fixed for the process lifetime.
    pub live_mode: bool,
    /// Comma separated entry points diverted to the waitlist while pre-launch.
    pub gated_entries: String,
    pub redirects: RedirectTargets,
    pub workflow_base_url: Url,
    pub workflow_secret: SecretString,
    pub workflow_timeout: std::time::Duration,
    pub cors_origin: HeaderValue,
    pub bind_addr: SocketAddr,
    pub log_file: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let jwt_secret: SecretString = SecretString::new(get_env::<String>("JWT_SECRET").into());
        let session_cookie_name: String =
            get_env_default("SESSION_COOKIE_NAME", "session_token".to_string());
        let session_ttl_secs: i64 = get_env_default("SESSION_TTL_SECS", 604_800);
        let session_leeway_secs: u64 = get_env_default("SESSION_LEEWAY_SECS", 60);
        let cookie_secure: bool = get_env_default("COOKIE_SECURE", true);

        // Unset means pre-launch.
        let live_mode: bool = get_env_default("LIVE_MODE", false);
        let gated_entries: String =
            get_env_default("GATED_ENTRIES", DEFAULT_GATED_ENTRIES.to_string());

        let defaults = RedirectTargets::default();
        let redirects = RedirectTargets {
            login: get_env_default("LOGIN_PATH", defaults.login),
            waitlist: get_env_default("WAITLIST_PATH", defaults.waitlist),
            unauthorized: get_env_default("UNAUTHORIZED_PATH", defaults.unauthorized),
        };

        let workflow_base_url: Url = get_env_default(
            "WORKFLOW_BASE_URL",
            Url::parse("http://127.0.0.1:8787").expect("default workflow url is valid"),
        );
        let workflow_secret: SecretString =
            SecretString::new(get_env::<String>("WORKFLOW_SECRET").into());
        let workflow_timeout_secs: u64 = get_env_default("WORKFLOW_TIMEOUT_SECS", 5);

        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)));
        let log_file: String = get_env_default("LOG_FILE", "app.log".to_string());

        Self {
            jwt_secret,
            session_cookie_name,
            session_ttl: Duration::seconds(session_ttl_secs),
            session_leeway_secs,
            cookie_secure,
            live_mode,
            gated_entries,
            redirects,
            workflow_base_url,
            workflow_secret,
            workflow_timeout: workflow_timeout(workflow_timeout_secs),
            cors_origin,
            bind_addr,
            log_file,
        }
    }
}

/// Clamped to at least one second.
fn workflow_timeout(secs: u64) -> std::time::Duration {
    std::time::Duration::from_secs(secs.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_timeout_has_one_second_floor() {
        assert_eq!(workflow_timeout(0), std::time::Duration::from_secs(1));
        assert_eq!(workflow_timeout(1), std::time::Duration::from_secs(1));
        assert_eq!(workflow_timeout(5), std::time::Duration::from_secs(5));
    }
}
