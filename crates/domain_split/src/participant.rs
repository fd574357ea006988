//! Participants sharing the bill

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SplitError;

/// A validated participant name
///
/// Names are trimmed of surrounding whitespace and never empty. Equality is
/// case-sensitive: "ali" and "Ali" are different people.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParticipantName(String);

impl ParticipantName {
    /// Parses raw form input into a participant name
    ///
    /// # Errors
    ///
    /// Returns `SplitError::EmptyParticipantName` if nothing is left after trimming
    pub fn parse(raw: &str) -> Result<Self, SplitError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SplitError::EmptyParticipantName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ParticipantName {
    type Error = SplitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ParticipantName> for String {
    fn from(name: ParticipantName) -> String {
        name.0
    }
}

impl AsRef<str> for ParticipantName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ParticipantName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ParticipantName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
