//! Domain logic for the consent-decision module.

pub mod decision;
pub mod form;
pub mod service;

pub use decision::{AuthenticatedUser, Decision};
pub use form::ConsentForm;
pub use service::DecisionResolver;
