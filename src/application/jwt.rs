use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use time::{Duration, OffsetDateTime};

use crate::app_error::{AppError, AppResult};
use crate::domain::entities::{identity::SessionClaims, role::Role};

/// Why a session token was refused.
///
/// Never surfaced to clients: the session resolver folds every variant into
/// `Identity::Unauthenticated`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidToken {
    #[error("Token is empty")]
    Empty,

    #[error("Invalid token format: {0}")]
    Malformed(String),

    #[error("Invalid signature")]
    BadSignature,

    #[error("Token has expired")]
    Expired,
}

/// HS256 codec for session tokens.
#[derive(Clone)]
pub struct TokenCodec {
    secret: SecretString,
    leeway_secs: u64,
}

impl TokenCodec {
    pub fn new(secret: SecretString, leeway_secs: u64) -> Self {
        Self {
            secret,
            leeway_secs,
        }
    }

    pub fn issue(&self, subject: &str, role: Role, ttl: Duration) -> AppResult<String> {
        self.issue_at(subject, role, ttl, now_unix())
    }

    pub fn issue_at(&self, subject: &str, role: Role, ttl: Duration, now: i64) -> AppResult<String> {
        if subject.trim().is_empty() {
            return Err(AppError::InvalidInput("Token subject must not be empty".into()));
        }
        let exp = now
            .checked_add(ttl.whole_seconds())
            .ok_or_else(|| AppError::InvalidInput("Token lifetime out of range".into()))?;
        let claims = SessionClaims {
            sub: subject.to_string(),
            role,
            iat: now,
            exp,
        };
        let header = Header::new(Algorithm::HS256);
        encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.secret.expose_secret().as_bytes()),
        )
        .map_err(|e| AppError::Internal(e.to_string()))
    }

    /// Decode against the current UTC clock.
    pub fn decode(&self, raw: &str) -> Result<SessionClaims, InvalidToken> {
        self.decode_at(raw, now_unix())
    }

    /// Decode against an explicit clock (Unix seconds).
    pub fn decode_at(&self, raw: &str, now: i64) -> Result<SessionClaims, InvalidToken> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(InvalidToken::Empty);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked below against `now` so decoding stays deterministic.
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let claims = decode::<SessionClaims>(
            raw,
            &DecodingKey::from_secret(self.secret.expose_secret().as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(classify)?;

        if claims.sub.trim().is_empty() {
            return Err(InvalidToken::Malformed("empty subject".into()));
        }

        let leeway = i64::try_from(self.leeway_secs).unwrap_or(i64::MAX);
        if claims.exp.saturating_add(leeway) < now {
            return Err(InvalidToken::Expired);
        }

        Ok(claims)
    }
}

fn classify(err: jsonwebtoken::errors::Error) -> InvalidToken {
    match err.kind() {
        ErrorKind::InvalidSignature => InvalidToken::BadSignature,
        ErrorKind::ExpiredSignature => InvalidToken::Expired,
        _ => InvalidToken::Malformed(err.to_string()),
    }
}

fn now_unix() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}
