#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Consent Decision SDK
//!
//! This crate provides the public API for the consent-decision module:
//!
//! - [`AuthorizationDecision`] - Accessor trait consumed by the authorization-flow engine
//! - [`UserDirectory`] - Identity-lookup trait implemented by directory plugins
//! - [`UserRecord`] - Opaque identity-profile handle returned by a directory
//! - [`Property`] - Key/value metadata attached to issued tokens and codes
//! - [`DirectoryError`] - Error types for directory lookups
//!
//! ## Usage
//!
//! The flow engine depends only on the accessor trait:
//!
//! ```ignore
//! use consent_decision_sdk::AuthorizationDecision;
//!
//! fn issue_response(decision: &dyn AuthorizationDecision) {
//!     if !decision.is_approved() {
//!         // produce the protocol-level denial
//!         return;
//!     }
//!     match decision.subject() {
//!         Some(subject) => { /* issue the grant for `subject` */ }
//!         None => { /* approved but login failed: ask the user to retry */ }
//!     }
//! }
//! ```

pub mod api;
pub mod directory;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::AuthorizationDecision;
pub use directory::{UserDirectory, UserRecord};
pub use error::DirectoryError;
pub use models::Property;
