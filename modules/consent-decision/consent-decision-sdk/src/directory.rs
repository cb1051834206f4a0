//! Identity-lookup traits implemented by user-directory plugins.
//!
//! The directory is the single point of trust delegation: the resolver
//! performs no credential comparison itself. Implementations decide how
//! credentials are verified (in-memory map, LDAP, datastore, ...).

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::DirectoryError;

/// Opaque handle to an authenticated end-user's profile.
///
/// Owned by the directory that resolved it; the consent-decision module
/// only references it for later claim lookups.
pub trait UserRecord: Send + Sync {
    /// The subject (unique, stable identifier) of the end-user.
    fn subject(&self) -> &str;

    /// Look up a claim by name, optionally localized by language tag.
    fn claim(&self, name: &str, language_tag: Option<&str>) -> Option<Value>;
}

/// Credential-based identity lookup.
///
/// Injected into the resolver as an explicit dependency, which keeps the
/// lookup substitutable with a fake directory in tests.
///
/// # Security
///
/// Implementations must treat blank or absent credentials as a non-match,
/// never as a wildcard match.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find the end-user holding the given login credentials.
    ///
    /// Returns `Ok(None)` when no user matches; unknown or blank
    /// credentials are a non-match, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the underlying directory cannot be
    /// queried at all (backend unavailable, protocol fault, ...).
    async fn find_by_credentials(
        &self,
        login_id: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<Arc<dyn UserRecord>>, DirectoryError>;
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use serde_json::json;

    use super::*;

    struct StubRecord;

    impl UserRecord for StubRecord {
        fn subject(&self) -> &str {
            "u-stub"
        }

        fn claim(&self, name: &str, _language_tag: Option<&str>) -> Option<Value> {
            (name == "name").then(|| json!("Stub User"))
        }
    }

    /// Matches exactly one credential pair.
    struct StubDirectory;

    #[async_trait]
    impl UserDirectory for StubDirectory {
        async fn find_by_credentials(
            &self,
            login_id: Option<&str>,
            password: Option<&str>,
        ) -> Result<Option<Arc<dyn UserRecord>>, DirectoryError> {
            match (login_id, password) {
                (Some("alice"), Some("correct")) => {
                    Ok(Some(Arc::new(StubRecord) as Arc<dyn UserRecord>))
                }
                _ => Ok(None),
            }
        }
    }

    #[tokio::test]
    async fn trait_object_lookup_finds_record() {
        let directory: Arc<dyn UserDirectory> = Arc::new(StubDirectory);

        let record = directory
            .find_by_credentials(Some("alice"), Some("correct"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(record.subject(), "u-stub");
        assert_eq!(record.claim("name", None), Some(json!("Stub User")));
        assert_eq!(record.claim("email", None), None);
    }

    #[tokio::test]
    async fn trait_object_miss_is_ok_none() {
        let directory: Arc<dyn UserDirectory> = Arc::new(StubDirectory);

        let record = directory
            .find_by_credentials(Some("alice"), Some("wrong"))
            .await
            .unwrap();

        assert!(record.is_none());
    }

    #[tokio::test]
    async fn trait_object_blank_credentials_miss() {
        let directory: Arc<dyn UserDirectory> = Arc::new(StubDirectory);

        let record = directory.find_by_credentials(None, None).await.unwrap();

        assert!(record.is_none());
    }
}
