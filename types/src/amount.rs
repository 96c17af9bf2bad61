//! Token amount in base units.
//!
//! Amounts are fixed-point integers (u128) to avoid floating-point errors.
//! Remote services exchange amounts as decimal text, not native integers, so
//! parsing from decimal ASCII is the primary constructor on the wire path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An amount of the network's native token, in its smallest unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount(u128);

impl Amount {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    pub fn saturating_mul(self, factor: u128) -> Self {
        Self(self.0.saturating_mul(factor))
    }
}

impl FromStr for Amount {
    type Err = std::num::ParseIntError;

    /// Parse from decimal ASCII, the wire representation used by bundles.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u128>().map(Self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
