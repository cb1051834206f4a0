//! Configuration for the consent-decision resolver.

use serde::Deserialize;

/// Configuration.
///
/// Selects the form-field names the resolver recognizes in a consent
/// submission. Defaults match the stock authorization page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsentDecisionConfig {
    /// Presence-only marker field set when the end-user clicked "Authorize".
    pub approved_field: String,

    /// Field carrying the end-user's login identifier.
    pub login_id_field: String,

    /// Field carrying the end-user's credential.
    pub password_field: String,
}

impl Default for ConsentDecisionConfig {
    fn default() -> Self {
        Self {
            approved_field: "authorized".to_owned(),
            login_id_field: "loginId".to_owned(),
            password_field: "password".to_owned(),
        }
    }
}
