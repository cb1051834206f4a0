//! The resolved outcome of a consent submission.

use std::fmt;
use std::sync::Arc;

use consent_decision_sdk::{AuthorizationDecision, Property, UserRecord};
use serde_json::Value;

/// Outcome of a single consent submission.
///
/// Constructed once by [`DecisionResolver`](super::DecisionResolver) and
/// never mutated. The three variants are the three exit points of
/// resolution; subject, authentication time, and identity exist exactly
/// together in [`Decision::Authenticated`], so claim access without a
/// resolved identity is unrepresentable.
pub enum Decision {
    /// The end-user denied the authorization request.
    Denied,
    /// The end-user approved the request but the login credentials matched
    /// no directory record. Neither a denial nor a success: the flow engine
    /// must produce a "login failed, retry" outcome, not a grant.
    Unauthenticated,
    /// The end-user approved the request and was authenticated.
    Authenticated(AuthenticatedUser),
}

/// The authenticated end-user behind an approved decision.
pub struct AuthenticatedUser {
    subject: String,
    authenticated_at: u64,
    identity: Arc<dyn UserRecord>,
}

impl AuthenticatedUser {
    pub(crate) fn new(authenticated_at: u64, identity: Arc<dyn UserRecord>) -> Self {
        Self {
            subject: identity.subject().to_owned(),
            authenticated_at,
            identity,
        }
    }

    /// The subject (unique identifier) of the end-user.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Authentication time in seconds since the Unix epoch.
    #[must_use]
    pub fn authenticated_at(&self) -> u64 {
        self.authenticated_at
    }

    /// Look up a claim on the resolved identity. Name and language tag are
    /// passed through unmodified.
    #[must_use]
    pub fn claim(&self, name: &str, language_tag: Option<&str>) -> Option<Value> {
        self.identity.claim(name, language_tag)
    }
}

impl fmt::Debug for AuthenticatedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the identity handle is opaque; log only what identifies the decision
        f.debug_struct("AuthenticatedUser")
            .field("subject", &self.subject)
            .field("authenticated_at", &self.authenticated_at)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Denied => f.write_str("Denied"),
            Self::Unauthenticated => f.write_str("Unauthenticated"),
            Self::Authenticated(user) => f.debug_tuple("Authenticated").field(user).finish(),
        }
    }
}

impl Decision {
    /// The authenticated user, when resolution reached authentication.
    #[must_use]
    pub fn authenticated(&self) -> Option<&AuthenticatedUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Denied | Self::Unauthenticated => None,
        }
    }
}

impl AuthorizationDecision for Decision {
    fn is_approved(&self) -> bool {
        !matches!(self, Self::Denied)
    }

    fn authenticated_at(&self) -> u64 {
        // 0 is the "not authenticated" sentinel: epoch-second zero is never
        // a legitimate wall-clock value for a live session
        self.authenticated()
            .map_or(0, AuthenticatedUser::authenticated_at)
    }

    fn subject(&self) -> Option<&str> {
        self.authenticated().map(AuthenticatedUser::subject)
    }

    fn claim(&self, name: &str, language_tag: Option<&str>) -> Option<Value> {
        self.authenticated()?.claim(name, language_tag)
    }

    fn token_properties(&self) -> Vec<Property> {
        // extension point for attaching custom metadata to the issued
        // token/code; not exercised by the default logic
        Vec::new()
    }
}
