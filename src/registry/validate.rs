//! Content id validation
//!
//! Catalog ids and sprite keys are snake_case identifiers:
//! - 2-64 characters
//! - Lowercase letters, digits and underscores
//! - Must start with a letter
//! - No trailing or doubled underscores

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Validation errors for content ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Id is too short (< 2 chars) or too long (> 64 chars)
    Length,
    /// Id contains invalid characters or format
    InvalidFormat,
    /// Id ends with an underscore or contains "__"
    StrayUnderscore,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Length => write!(f, "id must be 2-64 characters"),
            ValidationError::InvalidFormat => write!(
                f,
                "id must be lowercase alphanumeric with underscores and start with a letter"
            ),
            ValidationError::StrayUnderscore => {
                write!(f, "id cannot end with or repeat underscores")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

static CONTENT_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").unwrap());

/// Validate a catalog id or sprite key.
///
/// ```
/// use bathala_combat::registry::validate_content_id;
///
/// assert!(validate_content_id("tikbalang_scout").is_ok());
/// assert!(validate_content_id("Tikbalang").is_err());
/// assert!(validate_content_id("sigbin__charger").is_err());
/// ```
pub fn validate_content_id(id: &str) -> Result<(), ValidationError> {
    if id.len() < 2 || id.len() > 64 {
        return Err(ValidationError::Length);
    }
    if !CONTENT_ID_REGEX.is_match(id) {
        return Err(ValidationError::InvalidFormat);
    }
    if id.ends_with('_') || id.contains("__") {
        return Err(ValidationError::StrayUnderscore);
    }
    Ok(())
}
