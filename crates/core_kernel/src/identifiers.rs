//! Strongly-typed identifiers for domain entities
//!
//! Session identifiers are newtype wrappers around UUIDs. Item identifiers
//! are opaque strings: ledgers number them `1`, `2`, ... but a seed may carry
//! anything, so nothing outside [`ItemId::numeric`] assumes a format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::CoreError;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates a new time-ordered identifier (v7)
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            /// Accepts the bare UUID or the prefixed display form
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid_str = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Uuid::parse_str(uuid_str)
                    .map(Self)
                    .map_err(|_| CoreError::invalid_identifier(stringify!($name), s))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(SessionId, "SES");

/// Identifier of a bill line item
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Wraps an arbitrary identifier string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the numeric value when the identifier is a plain unsigned integer
    pub fn numeric(&self) -> Option<u64> {
        self.0.trim().parse().ok()
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_display() {
        let id = SessionId::new();
        assert!(id.to_string().starts_with("SES-"));
    }

    #[test]
    fn test_session_id_parsing() {
        let original = SessionId::new_v7();
        let parsed: SessionId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);

        let bare: SessionId = original.as_uuid().to_string().parse().unwrap();
        assert_eq!(original, bare);
    }

    #[test]
    fn test_item_id_numeric() {
        assert_eq!(ItemId::from(7u64).numeric(), Some(7));
        assert_eq!(ItemId::new("abc").numeric(), None);
        assert_eq!(ItemId::new("-1").numeric(), None);
    }

    #[test]
    fn test_item_id_serializes_as_string() {
        let json = serde_json::to_string(&ItemId::from(3u64)).unwrap();
        assert_eq!(json, "\"3\"");
    }
}
