//! Identifiers for platform records
//!
//! Platform IDs are sequence-based (`plat_1`, `plat_2`, ...) rather than
//! UUIDs so that they stay short and human-typeable in URLs.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Prefix carried by every platform identifier
pub const PLATFORM_ID_PREFIX: &str = "plat_";

/// Reasons a string is not a well-formed platform identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformIdError {
    #[error("platform id must start with 'plat_': {0}")]
    MissingPrefix(String),

    #[error("platform id has an invalid sequence number: {0}")]
    InvalidSequence(String),
}

/// Unique identifier for a platform
///
/// Wraps the raw string so that IDs taken from a request path can be looked
/// up even when they were never issued; only IDs produced by
/// [`PlatformId::from_sequence`] are guaranteed to be well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformId(String);

impl PlatformId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn from_sequence(sequence: u64) -> Self {
        Self(format!("{PLATFORM_ID_PREFIX}{sequence}"))
    }

    /// Sequence number encoded in the identifier.
    ///
    /// Only the canonical rendering is accepted, so `plat_01` and `plat_+1`
    /// are rejected even though their digits parse.
    pub fn sequence(&self) -> Result<u64, PlatformIdError> {
        let digits = self
            .0
            .strip_prefix(PLATFORM_ID_PREFIX)
            .ok_or_else(|| PlatformIdError::MissingPrefix(self.0.clone()))?;

        let sequence: u64 = digits
            .parse()
            .map_err(|_| PlatformIdError::InvalidSequence(self.0.clone()))?;

        if sequence.to_string() != digits {
            return Err(PlatformIdError::InvalidSequence(self.0.clone()));
        }

        Ok(sequence)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
