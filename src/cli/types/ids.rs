//! ID types for match records.

use crate::error::{FantasyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for match identifiers issued by the match provider.
///
/// # Examples
///
/// ```rust
/// use dota_fantasy::MatchId;
///
/// let match_id = MatchId::new(7_450_123_456);
/// assert_eq!(match_id.as_u64(), 7_450_123_456);
/// assert_eq!(match_id.to_string(), "7450123456");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchId(pub u64);

impl MatchId {
    /// Create a new MatchId from a u64 value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying u64 value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MatchId {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        trimmed
            .parse()
            .map(Self)
            .map_err(|_| FantasyError::InvalidMatchId {
                input: trimmed.to_string(),
            })
    }
}

/// Ordered list of match IDs as typed by the user: `"123, 456,789"`.
///
/// Order and repeats are kept; deduplication happens in the aggregator so
/// that repeats can be reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchIdList(pub Vec<MatchId>);

impl MatchIdList {
    pub fn ids(&self) -> &[MatchId] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for MatchIdList {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(MatchId::from_str)
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

impl fmt::Display for MatchIdList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|id| id.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}
