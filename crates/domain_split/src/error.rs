//! Bill split domain errors
//!
//! None of these are fatal. Each one reports an edit that was ignored and
//! left the ledger untouched.

use thiserror::Error;

/// Errors that can occur in the bill split domain
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SplitError {
    /// Participant name was empty after trimming
    #[error("Participant name is empty")]
    EmptyParticipantName,

    /// Participant already present
    #[error("Participant already exists: {0}")]
    DuplicateParticipant(String),

    /// Assignment to someone who is not a participant
    #[error("Unknown participant: {0}")]
    UnknownParticipant(String),

    /// Item not found
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Recognition payload could not be read
    #[error("Malformed seed payload: {0}")]
    MalformedSeed(String),
}
