//! Fee basis: the two-stage representation of transfer cost.

use crate::amount::Amount;
use serde::{Deserialize, Serialize};

/// The network's current price per serialized byte, as reported by the
/// remote service. Input to both estimation stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkFee {
    price_per_byte: Amount,
}

impl NetworkFee {
    pub fn new(price_per_byte: Amount) -> Self {
        Self { price_per_byte }
    }

    pub fn price_per_byte(&self) -> Amount {
        self.price_per_byte
    }
}

/// The cost basis of a transfer.
///
/// `Initial` is derived from a size-only serialization before submission.
/// `Refined` is recomputed once the remote service reports actual resource
/// consumption; it carries padded gas/storage limits and the next value of
/// the per-account anti-replay counter. A refined basis is never cheaper
/// than what the reported consumption implies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeBasis {
    Initial {
        price_per_byte: Amount,
        /// Length of the unsigned fee-estimation serialization. Recorded so
        /// refinement can recompute cost without re-serializing.
        size_bytes: u64,
    },
    Refined {
        price_per_byte: Amount,
        size_bytes: u64,
        /// Reported gas consumption plus safety margin.
        gas_limit: u64,
        /// Reported storage consumption plus safety margin.
        storage_limit: u64,
        /// The *next* per-account sequence value (reported counter + 1).
        counter: u64,
        fee: Amount,
    },
}

impl FeeBasis {
    /// A basis carrying a fee the remote service actually charged, with no
    /// estimation inputs. Attached to transfers recovered from confirmed
    /// bundles.
    pub fn from_actual_fee(fee: Amount) -> Self {
        Self::Refined {
            price_per_byte: Amount::ZERO,
            size_bytes: 0,
            gas_limit: 0,
            storage_limit: 0,
            counter: 0,
            fee,
        }
    }

    /// The total fee this basis implies.
    pub fn fee(&self) -> Amount {
        match self {
            Self::Initial {
                price_per_byte,
                size_bytes,
            } => price_per_byte.saturating_mul(*size_bytes as u128),
            Self::Refined { fee, .. } => *fee,
        }
    }

    /// Serialized size this basis was computed from.
    pub fn size_bytes(&self) -> u64 {
        match self {
            Self::Initial { size_bytes, .. } | Self::Refined { size_bytes, .. } => *size_bytes,
        }
    }

    pub fn is_initial(&self) -> bool {
        matches!(self, Self::Initial { .. })
    }

    /// The reserved anti-replay counter, present only after refinement.
    pub fn counter(&self) -> Option<u64> {
        match self {
            Self::Initial { .. } => None,
            Self::Refined { counter, .. } => Some(*counter),
        }
    }
}

impl Default for FeeBasis {
    /// The zero-cost placeholder attached to transfers recovered from remote
    /// bundles, where the real fee arrives in the bundle itself.
    fn default() -> Self {
        Self::Initial {
            price_per_byte: Amount::ZERO,
            size_bytes: 0,
        }
    }
}
