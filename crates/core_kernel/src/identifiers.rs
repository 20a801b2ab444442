//! Strongly-typed identifiers
//!
//! Session ids are time-ordered UUIDs wrapped in a newtype so they cannot be
//! confused with any other UUID. They display with an `SES-` prefix; parsing
//! accepts the id with or without it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const SESSION_PREFIX: &str = "SES-";

/// Identifier of a login session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new time-ordered identifier (v7)
    pub fn new_v7() -> Self {
        Self(Uuid::now_v7())
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", SESSION_PREFIX, self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid_str = s.strip_prefix(SESSION_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(uuid_str)?))
    }
}
