//! Resolution service for consent submissions.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use consent_decision_sdk::{DirectoryError, UserDirectory};

use crate::config::ConsentDecisionConfig;

use super::decision::{AuthenticatedUser, Decision};
use super::form::ConsentForm;

/// Resolves consent submissions into [`Decision`]s.
///
/// One resolver instance serves any number of submissions; each call to
/// [`resolve`](Self::resolve) is an independent, request-scoped
/// computation with no shared mutable state.
pub struct DecisionResolver {
    directory: Arc<dyn UserDirectory>,
    config: ConsentDecisionConfig,
}

impl DecisionResolver {
    /// Create a resolver with the default field names.
    #[must_use]
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self::with_config(directory, ConsentDecisionConfig::default())
    }

    /// Create a resolver with custom field names.
    #[must_use]
    pub fn with_config(directory: Arc<dyn UserDirectory>, config: ConsentDecisionConfig) -> Self {
        Self { directory, config }
    }

    /// Resolve a consent submission.
    ///
    /// Single-pass with three exit points:
    ///
    /// 1. No approval marker ⇒ [`Decision::Denied`]. The directory is never
    ///    queried on a denial.
    /// 2. Marker present but the credentials match no record ⇒
    ///    [`Decision::Unauthenticated`].
    /// 3. Marker present and a record matched ⇒
    ///    [`Decision::Authenticated`]; the authentication time is "just
    ///    now", since the consent page mandates fresh credential entry on
    ///    every decision.
    ///
    /// Approval is determined by field presence, not value truthiness.
    ///
    /// # Errors
    ///
    /// Propagates [`DirectoryError`] from the directory lookup unhandled;
    /// the request-handling layer maps such faults to a user-facing error
    /// response.
    pub async fn resolve(&self, form: &ConsentForm) -> Result<Decision, DirectoryError> {
        if !form.contains(&self.config.approved_field) {
            tracing::debug!("authorization request denied by the end-user");
            return Ok(Decision::Denied);
        }

        let login_id = form.first(&self.config.login_id_field);
        let password = form.first(&self.config.password_field);

        let Some(identity) = self.directory.find_by_credentials(login_id, password).await? else {
            tracing::warn!("consent approved but the credentials matched no user");
            return Ok(Decision::Unauthenticated);
        };

        let user = AuthenticatedUser::new(epoch_seconds_now(), identity);
        tracing::debug!(subject = user.subject(), "end-user authenticated at consent");
        Ok(Decision::Authenticated(user))
    }
}

fn epoch_seconds_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
