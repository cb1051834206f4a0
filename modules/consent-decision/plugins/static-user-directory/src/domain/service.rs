//! Service implementation for the static user directory.

use std::collections::HashMap;
use std::sync::Arc;

use consent_decision_sdk::UserRecord;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::config::StaticUserDirectoryConfig;

/// Static user directory service.
///
/// Maps login identifiers to stored credentials and identity records.
/// Blank or absent credentials never match.
pub struct Service {
    users: HashMap<String, StoredUser>,
}

struct StoredUser {
    password: SecretString,
    record: Arc<StaticUser>,
}

/// In-memory identity record backing [`UserRecord`].
struct StaticUser {
    subject: String,
    claims: HashMap<String, Value>,
}

impl UserRecord for StaticUser {
    fn subject(&self) -> &str {
        &self.subject
    }

    fn claim(&self, name: &str, language_tag: Option<&str>) -> Option<Value> {
        // prefer the language-tagged key, fall back to the untagged one
        if let Some(tag) = language_tag
            && let Some(value) = self.claims.get(&format!("{name}#{tag}"))
        {
            return Some(value.clone());
        }
        self.claims.get(name).cloned()
    }
}

impl Service {
    /// Create a service from directory configuration.
    ///
    /// Later entries with a duplicate `login_id` replace earlier ones.
    #[must_use]
    pub fn from_config(cfg: StaticUserDirectoryConfig) -> Self {
        let users = cfg
            .users
            .into_iter()
            .map(|entry| {
                let stored = StoredUser {
                    password: entry.password,
                    record: Arc::new(StaticUser {
                        subject: entry.subject,
                        claims: entry.claims,
                    }),
                };
                (entry.login_id, stored)
            })
            .collect();

        Self { users }
    }

    /// Find the user holding the given login credentials.
    ///
    /// Returns `None` for unknown, blank, or absent credentials.
    #[must_use]
    pub fn find(
        &self,
        login_id: Option<&str>,
        password: Option<&str>,
    ) -> Option<Arc<dyn UserRecord>> {
        let login_id = login_id.filter(|s| !s.is_empty())?;
        let password = password.filter(|s| !s.is_empty())?;

        let stored = self.users.get(login_id)?;
        if stored.password.expose_secret() != password {
            tracing::debug!(login_id, "credential mismatch");
            return None;
        }

        Some(stored.record.clone())
    }
}
