//! Raw consent-form input.

use std::collections::HashMap;

/// A consent-page form submission: field name to one-or-many string values.
///
/// Only the fields named by
/// [`ConsentDecisionConfig`](crate::config::ConsentDecisionConfig) are
/// semantically significant; everything else is carried but ignored.
#[derive(Debug, Clone, Default)]
pub struct ConsentForm {
    fields: HashMap<String, Vec<String>>,
}

impl ConsentForm {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` request body.
    ///
    /// Repeated field names accumulate values in submission order; a bare
    /// field name (no `=`) yields an empty value, which still counts as
    /// presence.
    ///
    /// # Errors
    ///
    /// Returns a deserialization error when the body is not valid
    /// urlencoded data.
    pub fn from_urlencoded(body: &str) -> Result<Self, serde_urlencoded::de::Error> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(body)?;
        Ok(pairs.into_iter().collect())
    }

    /// Append a value for a field.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.entry(name.into()).or_default().push(value.into());
    }

    /// Whether the field was present in the submission, regardless of value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// First submitted value of a field, if any.
    #[must_use]
    pub fn first(&self, name: &str) -> Option<&str> {
        self.fields.get(name)?.first().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for ConsentForm {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut form = Self::new();
        for (name, value) in iter {
            form.insert(name, value);
        }
        form
    }
}
