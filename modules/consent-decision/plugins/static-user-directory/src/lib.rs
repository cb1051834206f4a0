#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static User Directory
//!
//! A [`UserDirectory`](consent_decision_sdk::UserDirectory) with a static
//! login-to-identity mapping for development and testing. Stands in for a
//! real directory backend (LDAP, datastore) behind the consent-decision
//! resolver.
//!
//! Blank or absent credentials never match, and stored passwords are
//! wrapped in [`secrecy::SecretString`] so `Debug` output redacts them.
//!
//! ## Configuration
//!
//! ```yaml
//! static_user_directory:
//!   users:
//!     - login_id: "alice"
//!       password: "correct horse"
//!       subject: "u-123"
//!       claims:
//!         name: "Alice Example"
//!         "name#ja": "アリス"
//!         email: "alice@example.com"
//! ```

pub mod config;
pub mod domain;

pub use config::{StaticUserDirectoryConfig, UserEntry};
pub use domain::service::Service;
