use std::num::ParseIntError;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Smallest identifier handed out by [`MemberId::generate`].
pub const MIN_GENERATED_ID: i64 = 111_111;

/// Largest identifier handed out by [`MemberId::generate`].
pub const MAX_GENERATED_ID: i64 = 999_999;

/// Numeric identifier of a member.
///
/// Wraps an integer to provide type safety and prevent mixing up
/// member IDs with other numeric values. Serialized as a plain JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(i64);

impl MemberId {
    /// Creates a member ID from a raw integer.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Generates a random six-digit ID in `[111111, 999999]`.
    ///
    /// Uniqueness is not guaranteed; a collision surfaces as a
    /// duplicate-key failure in the persistence layer.
    pub fn generate() -> Self {
        Self(rand::thread_rng().gen_range(MIN_GENERATED_ID..=MAX_GENERATED_ID))
    }

    /// Returns the underlying integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MemberId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

impl From<i64> for MemberId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<MemberId> for i64 {
    fn from(id: MemberId) -> Self {
        id.0
    }
}
