use serde::{Deserialize, Serialize};

use super::role::Role;

/// Trusted payload of a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user id in the document store).
    pub sub: String,

    /// Tokens minted before roles existed carry no role claim.
    #[serde(default)]
    pub role: Role,

    /// Issued at (Unix timestamp)
    #[serde(default)]
    pub iat: i64,

    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// Outcome of resolving the session of a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Authenticated(SessionClaims),
    Unauthenticated,
}

impl Identity {
    pub fn claims(&self) -> Option<&SessionClaims> {
        match self {
            Identity::Authenticated(claims) => Some(claims),
            Identity::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Identity::Authenticated(_))
    }

    pub fn role(&self) -> Option<Role> {
        self.claims().map(|c| c.role)
    }

    pub fn subject(&self) -> Option<&str> {
        self.claims().map(|c| c.sub.as_str())
    }
}
