use axum::http::{HeaderMap, header::AUTHORIZATION};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    domain::entities::identity::Identity,
    jwt::TokenCodec,
};

/// Turns an inbound request into an [`Identity`].
///
/// The token is looked up in the session cookie first (browsers), then in an
/// `Authorization: Bearer` header (server-to-server callers). Missing or
/// invalid tokens degrade to `Identity::Unauthenticated`; resolution never
/// fails and keeps no state between calls.
#[derive(Clone)]
pub struct SessionResolver {
    codec: TokenCodec,
    cookie_name: String,
}

impl SessionResolver {
    pub fn new(codec: TokenCodec, cookie_name: impl Into<String>) -> Self {
        Self {
            codec,
            cookie_name: cookie_name.into(),
        }
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn extract_token(&self, headers: &HeaderMap) -> Option<String> {
        let jar = CookieJar::from_headers(headers);
        if let Some(cookie) = jar.get(&self.cookie_name) {
            let value = cookie.value().trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }

        headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(extract_from_header)
            .map(str::to_string)
    }

    pub fn resolve(&self, headers: &HeaderMap) -> Identity {
        let Some(token) = self.extract_token(headers) else {
            return Identity::Unauthenticated;
        };

        match self.codec.decode(&token) {
            Ok(claims) => Identity::Authenticated(claims),
            Err(reason) => {
                tracing::debug!(reason = %reason, "Discarding invalid session token");
                Identity::Unauthenticated
            }
        }
    }
}

/// Extract token from Authorization Bearer header.
pub fn extract_from_header(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
