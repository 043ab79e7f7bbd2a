//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty or only whitespace.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
}

/// A validated speaker name.
///
/// Names are trimmed on construction and must not be blank. Entries that are
/// not people (the welcome banner, the trailing "Misc" slot) use the same type
/// since they occupy roster positions like anyone else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SpeakerName(String);

impl SpeakerName {
    /// Creates a new name after validation.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: "speaker name",
            });
        }
        if trimmed.len() == name.len() {
            Ok(Self(name))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SpeakerName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SpeakerName> for String {
    fn from(name: SpeakerName) -> Self {
        name.0
    }
}

impl fmt::Display for SpeakerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SpeakerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaker_name_rejects_blank() {
        assert_eq!(
            SpeakerName::new("   "),
            Err(ValidationError::Empty {
                field: "speaker name"
            })
        );
        assert!(SpeakerName::new("").is_err());
    }

    #[test]
    fn test_speaker_name_trims_whitespace() {
        let name = SpeakerName::new("  Alice \n").unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_speaker_name_serde_validates() {
        let name: SpeakerName = serde_json::from_str(r#""Bob""#).unwrap();
        assert_eq!(name.to_string(), "Bob");

        let blank: Result<SpeakerName, _> = serde_json::from_str(r#""  ""#);
        assert!(blank.is_err());
    }
}
