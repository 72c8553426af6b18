//! Form and query field access
//!
//! HTML forms send repeated keys for checkboxes (`branches=a&branches=b`)
//! and some clients use the bracketed `branches[]` spelling. Both
//! `Form<FormFields>` and `Query<FormFields>` keep every pair so handlers
//! can read single values and lists alike.

use serde::Deserialize;

use linc_core::ValidationError;

/// Ordered key/value pairs from a urlencoded body or query string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct FormFields(Vec<(String, String)>);

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

impl FormFields {
    /// First value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value for `key`, or a validation error naming the field.
    pub fn require(&self, key: &'static str) -> Result<&str, ValidationError> {
        self.get(key).ok_or(ValidationError::Missing { field: key })
    }

    /// Every value sent under `key` or `key[]`, in request order.
    pub fn all(&self, key: &str) -> Vec<&str> {
        let bracketed = format!("{key}[]");
        self.0
            .iter()
            .filter(|(k, _)| k == key || *k == bracketed)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}
