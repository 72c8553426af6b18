/// Structured error types for linc-core.
///
/// Uses `thiserror` so the server can match on variants.
/// The binary crate (linc-cli) wraps these in `anyhow` for startup failures.
use thiserror::Error;

/// Validation error for user-supplied input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Field exceeds maximum length
    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format
    #[error("{field}: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },

    /// Invalid enum variant
    #[error("invalid {field} value: '{value}'")]
    InvalidVariant { field: &'static str, value: String },

    /// Required form or query field was not sent
    #[error("missing required field '{field}'")]
    Missing { field: &'static str },
}

impl ValidationError {
    /// Create an invalid variant error
    pub fn invalid_variant(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidVariant {
            field,
            value: value.into(),
        }
    }
}

/// Configuration error raised while reading the environment
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Variable is set but cannot be parsed
    #[error("invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn invalid_value(
        key: &'static str,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidValue {
            key,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
