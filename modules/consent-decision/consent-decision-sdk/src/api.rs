//! Accessor trait for a resolved consent decision.
//!
//! This trait defines the fixed contract the external authorization-flow
//! engine queries to build the protocol-level grant or denial response.
//! The resolver implements it; tests may substitute a stub.

use serde_json::Value;

use crate::models::Property;

/// Read API over a resolved consent decision.
///
/// All methods are pure and idempotent: repeated calls after resolution
/// return identical values.
///
/// ```ignore
/// let decision = resolver.resolve(&form).await?;
///
/// if decision.is_approved() && decision.subject().is_some() {
///     // issue an authorization code / tokens for the subject
/// }
/// ```
pub trait AuthorizationDecision: Send + Sync {
    /// Whether the end-user granted the client's authorization request.
    fn is_approved(&self) -> bool;

    /// The time the end-user was authenticated, in seconds since the Unix
    /// epoch. Returns `0` when no user was authenticated.
    fn authenticated_at(&self) -> u64;

    /// The subject (unique identifier) of the authenticated end-user, or
    /// `None` when the request was denied or the login failed.
    fn subject(&self) -> Option<&str>;

    /// Look up a claim of the authenticated end-user.
    ///
    /// The claim name and optional language tag are passed through to the
    /// resolved identity unmodified. Resolves to `None` when no user was
    /// authenticated.
    fn claim(&self, name: &str, language_tag: Option<&str>) -> Option<Value>;

    /// Extra key/value pairs to associate with the token or authorization
    /// code eventually issued for this decision.
    fn token_properties(&self) -> Vec<Property>;
}
