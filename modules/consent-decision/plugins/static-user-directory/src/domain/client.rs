//! `UserDirectory` implementation for the static directory.

use std::sync::Arc;

use async_trait::async_trait;
use consent_decision_sdk::{DirectoryError, UserDirectory, UserRecord};

use super::service::Service;

#[async_trait]
impl UserDirectory for Service {
    async fn find_by_credentials(
        &self,
        login_id: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<Arc<dyn UserRecord>>, DirectoryError> {
        // in-memory lookup: a miss is Ok(None), never an error
        Ok(self.find(login_id, password))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use serde_json::json;

    use crate::config::StaticUserDirectoryConfig;

    use super::*;

    fn directory() -> Arc<dyn UserDirectory> {
        let cfg: StaticUserDirectoryConfig = serde_json::from_value(json!({
            "users": [{ "login_id": "alice", "password": "correct", "subject": "u-123" }],
        }))
        .unwrap();
        Arc::new(Service::from_config(cfg))
    }

    #[tokio::test]
    async fn trait_lookup_finds_user() {
        let record = directory()
            .find_by_credentials(Some("alice"), Some("correct"))
            .await
            .unwrap();

        assert_eq!(record.unwrap().subject(), "u-123");
    }

    #[tokio::test]
    async fn trait_lookup_miss_is_ok_none() {
        let record = directory()
            .find_by_credentials(Some("alice"), Some("wrong"))
            .await
            .unwrap();

        assert!(record.is_none());
    }
}
