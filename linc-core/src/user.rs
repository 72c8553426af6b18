//! User name validation
//!
//! The display name is the only identity a student has, so it doubles as
//! the `users` primary key and as the `assigned_to` value on claimed topics.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::ValidationError;

/// Maximum length for user names
pub const MAX_USER_NAME_LEN: usize = 100;

static CONTROL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{Cc}]").expect("invalid control char regex"));

/// Validated, trimmed user name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Create a user name from raw form input.
    ///
    /// # Rules
    /// - Surrounding whitespace is trimmed
    /// - Must not be empty after trimming
    /// - Max 100 characters
    /// - No control characters
    ///
    /// # Example
    /// ```
    /// use linc_core::UserName;
    ///
    /// assert_eq!(UserName::new("  Alice ").unwrap().as_str(), "Alice");
    /// assert!(UserName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let name = s.trim();

        if name.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if name.chars().count() > MAX_USER_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_USER_NAME_LEN,
            });
        }

        if CONTROL_RE.is_match(name) {
            return Err(ValidationError::InvalidFormat {
                field: "name",
                reason: "must not contain control characters",
            });
        }

        Ok(Self(name.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        let name = UserName::new("  Alice  ").unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn keeps_inner_spaces_and_unicode() {
        assert_eq!(UserName::new("Zoë van Dijk").unwrap().as_str(), "Zoë van Dijk");
    }

    #[test]
    fn rejects_empty() {
        let err = UserName::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));

        let err = UserName::new(" \t ").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn rejects_control_characters() {
        let err = UserName::new("Bob\u{0007}").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn max_length_counts_chars() {
        let name_100 = "é".repeat(100);
        assert!(UserName::new(&name_100).is_ok());

        let name_101 = "a".repeat(101);
        let err = UserName::new(&name_101).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 100, .. }));
    }
}
