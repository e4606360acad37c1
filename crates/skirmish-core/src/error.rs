//! Errors for the few fallible operations around the simulation.

use std::fmt;

/// Failure to encode or decode a level snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// Serialization failed.
    Encode(String),
    /// The input is not a valid snapshot document.
    Decode(String),
    /// The snapshot has no player ship, so no level is running.
    MissingPlayer,
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(msg) => write!(f, "failed to encode snapshot: {msg}"),
            Self::Decode(msg) => write!(f, "failed to decode snapshot: {msg}"),
            Self::MissingPlayer => write!(f, "snapshot has no player ship"),
        }
    }
}

impl std::error::Error for SnapshotError {}
