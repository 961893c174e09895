//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of an inventory record.
///
/// Persisted as a bare JSON integer. New ids are derived from the creation
/// time in milliseconds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> i64 {
        self.0
    }

    /// Generate an id for a record created at `now_ms`.
    ///
    /// The result is `max(now_ms, max(existing) + 1)`, so it never collides
    /// with an id already in use, even when two records are created within
    /// the same millisecond or the clock steps backwards. Fails with
    /// [`DomainError::InvariantViolation`] when an existing id is already
    /// `i64::MAX` and the clock is not ahead of it.
    pub fn generate_at<I>(now_ms: i64, existing: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = RecordId>,
    {
        let Some(highest) = existing.into_iter().max() else {
            return Ok(Self(now_ms));
        };
        if now_ms > highest.0 {
            return Ok(Self(now_ms));
        }
        highest
            .0
            .checked_add(1)
            .map(Self)
            .ok_or_else(|| DomainError::invariant(format!("no record id left above {highest}")))
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<RecordId> for i64 {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl FromStr for RecordId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|e| DomainError::invalid_id(format!("RecordId: {e}")))?;
        Ok(Self(value))
    }
}
