#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Consent Decision Module
//!
//! Resolves the outcome of a single end-user consent step in an OAuth/OIDC
//! authorization flow. Given the submitted form data from the authorization
//! consent page, the resolver determines whether the user approved the
//! request, looks up the authenticated identity through an injected
//! [`UserDirectory`](consent_decision_sdk::UserDirectory), and exposes the
//! resolved facts through the
//! [`AuthorizationDecision`](consent_decision_sdk::AuthorizationDecision)
//! accessor contract consumed by the authorization-flow engine.
//!
//! The resolver is the decision boundary between raw HTTP form input and
//! protocol-level authorization results. It performs no credential
//! comparison and no scope/claim policy; it only reports facts about the
//! already-authenticated subject.

pub mod config;
pub mod domain;

pub use config::ConsentDecisionConfig;
pub use domain::{AuthenticatedUser, ConsentForm, Decision, DecisionResolver};
