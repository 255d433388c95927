use crate::domain::entities::{identity::Identity, launch::LaunchGate, role::Role};

/// What a route demands of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Public, but still subject to the launch gate.
    Anyone,
    Authenticated,
    /// Implies `Authenticated`.
    Admin,
}

/// Browser pages get redirects; programmatic API callers get status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardContext {
    Page,
    Api,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectToLogin,
    RedirectToWaitlist,
    RedirectToUnauthorized,
    /// Always rendered as 401.
    Reject,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Single decision point shared by page handlers and API extractors.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    gate: LaunchGate,
}

impl RouteGuard {
    pub fn new(gate: LaunchGate) -> Self {
        Self { gate }
    }

    pub fn gate(&self) -> &LaunchGate {
        &self.gate
    }

    pub fn is_live(&self) -> bool {
        self.gate.is_live()
    }

    /// First matching rule wins:
    /// gated route, then missing session, then missing role.
    pub fn authorize(
        &self,
        identity: &Identity,
        requirement: Requirement,
        context: GuardContext,
        route: &str,
    ) -> Decision {
        if self.gate.gates(route) {
            return Decision::RedirectToWaitlist;
        }

        let needs_session = matches!(requirement, Requirement::Authenticated | Requirement::Admin);
        let Some(claims) = identity.claims() else {
            if !needs_session {
                return Decision::Allow;
            }
            return match context {
                GuardContext::Page => Decision::RedirectToLogin,
                GuardContext::Api => Decision::Reject,
            };
        };

        if requirement == Requirement::Admin && claims.role != Role::Admin {
            return match context {
                GuardContext::Page => Decision::RedirectToUnauthorized,
                GuardContext::Api => Decision::Reject,
            };
        }

        Decision::Allow
    }
}
