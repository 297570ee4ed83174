//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of a product, assigned by the store API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Wraps a raw id as received from the store API.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric id.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Tag minted for each product-detail request.
///
/// Only the most recently issued tag may write its response into the
/// catalog; responses carrying an older tag are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DetailRequestId(Uuid);

impl DetailRequestId {
    /// Creates a new random DetailRequestId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

}

impl Default for DetailRequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DetailRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tag minted for each login attempt.
///
/// Only the latest attempt may settle the session; a response to an
/// attempt that was superseded or cancelled by logout is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoginAttemptId(Uuid);

impl LoginAttemptId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LoginAttemptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LoginAttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
