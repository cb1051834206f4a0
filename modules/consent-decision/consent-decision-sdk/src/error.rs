//! Error types for the consent-decision module.

use thiserror::Error;

/// Errors raised by a user-directory lookup.
///
/// A failed login is not an error (the directory returns `Ok(None)`);
/// these variants cover the directory itself being unable to answer.
/// The resolver performs no retry and no recovery: the request-handling
/// layer maps these to a user-facing error response.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The directory backend is not reachable or not ready.
    #[error("directory unavailable: {0}")]
    Unavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
