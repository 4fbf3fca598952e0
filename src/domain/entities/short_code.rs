//! Short code value type.

use std::fmt;
use std::str::FromStr;

/// Number of characters in every short code.
pub const SHORT_CODE_LENGTH: usize = 6;

/// Error returned when a string is not a well-formed short code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidShortCode {
    #[error("short code must be {expected} characters, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("short code contains a character outside [A-Za-z0-9]: {0:?}")]
    Character(char),
}

/// A fixed-length, URL-safe token identifying a stored long URL.
///
/// Only ASCII letters and digits are accepted, so a code can be placed in a
/// URL path segment without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortCode(String);

impl ShortCode {
    /// Parses and validates a short code.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidShortCode`] if the length differs from
    /// [`SHORT_CODE_LENGTH`] or a character is not ASCII alphanumeric.
    pub fn parse(code: impl Into<String>) -> Result<Self, InvalidShortCode> {
        let code = code.into();

        if let Some(c) = code.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(InvalidShortCode::Character(c));
        }

        if code.len() != SHORT_CODE_LENGTH {
            return Err(InvalidShortCode::Length {
                expected: SHORT_CODE_LENGTH,
                actual: code.len(),
            });
        }

        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ShortCode {
    type Err = InvalidShortCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
