//! Configuration for the static user directory.

use std::collections::HashMap;

use secrecy::SecretString;
use serde::Deserialize;
use serde_json::Value;

/// Directory configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticUserDirectoryConfig {
    /// Static login-to-identity entries.
    pub users: Vec<UserEntry>,
}

/// One end-user entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserEntry {
    /// Login identifier presented on the consent page.
    pub login_id: String,

    /// Expected credential. Redacted in `Debug` output.
    pub password: SecretString,

    /// Subject (unique identifier) of the end-user.
    pub subject: String,

    /// Identity claims, keyed by claim name. A key may carry a
    /// `#language-tag` suffix (e.g. `name#ja`) for localized values.
    #[serde(default)]
    pub claims: HashMap<String, Value>,
}
