//! Access code value object.
//!
//! The code a respondent types to create or resume an assessment. It is
//! also the storage key of the session it identifies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Maximum accepted length of an access code, after trimming.
pub const MAX_ACCESS_CODE_LENGTH: usize = 64;

/// Normalized access code: trimmed, upper-case ASCII letters, digits, `-` or `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccessCode(String);

impl AccessCode {
    /// Parses and normalizes a raw code as typed by the respondent.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let code = raw.as_ref().trim().to_ascii_uppercase();

        if code.is_empty() {
            return Err(ValidationError::empty_field("access_code"));
        }
        if code.len() > MAX_ACCESS_CODE_LENGTH {
            return Err(ValidationError::invalid_format(
                "access_code",
                format!("must be {} characters or less", MAX_ACCESS_CODE_LENGTH),
            ));
        }
        if let Some(bad) = code
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(ValidationError::invalid_format(
                "access_code",
                format!("unexpected character '{}'", bad),
            ));
        }

        Ok(Self(code))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccessCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccessCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AccessCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccessCode> for String {
    fn from(code: AccessCode) -> Self {
        code.0
    }
}
