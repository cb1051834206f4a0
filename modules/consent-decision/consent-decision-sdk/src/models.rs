//! Domain models for the consent-decision module.

use serde::{Deserialize, Serialize};

/// A key/value pair associated with an issued access token or
/// authorization code.
///
/// Hidden properties travel with the token but are not exposed in
/// introspection responses to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property name.
    pub key: String,
    /// Property value.
    pub value: String,
    /// Whether the property is hidden from the client.
    #[serde(default)]
    pub hidden: bool,
}

impl Property {
    /// Create a visible property.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            hidden: false,
        }
    }

    /// Mark the property as hidden from the client.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn property_is_visible_by_default() {
        let prop = Property::new("department", "engineering");

        assert_eq!(prop.key, "department");
        assert_eq!(prop.value, "engineering");
        assert!(!prop.hidden);
    }

    #[test]
    fn property_hidden_marker() {
        let prop = Property::new("internal_id", "42").hidden();

        assert!(prop.hidden);
    }

    #[test]
    fn property_hidden_defaults_on_deserialize() {
        let prop: Property =
            serde_json::from_str(r#"{"key":"plan","value":"gold"}"#).unwrap();

        assert_eq!(prop, Property::new("plan", "gold"));
    }
}
