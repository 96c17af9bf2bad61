//! Network-agnostic wallet address with explicit sentinel variants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An address on some network, in canonical binary form.
///
/// The two sentinels are reserved out of the normal address space: `FeeSink`
/// stands for the network's protocol fee sink, `Unknown` for an unresolved or
/// un-revealed counterparty (the target of burn transfers). Making them
/// explicit variants, rather than magic byte patterns, keeps recognition O(1)
/// and independent of any text encoding.
///
/// `Concrete` carries the network-defined payload bytes (for Tezos: one kind
/// byte followed by a 20-byte Blake2b key or contract hash). Equality and
/// hashing are byte-level; there is exactly one canonical binary form per
/// logical address.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Address {
    /// Protocol fee sink.
    FeeSink,
    /// Unresolved / un-revealed counterparty (burn target).
    Unknown,
    /// A real on-chain address; payload layout is network-defined.
    Concrete(Vec<u8>),
}

impl Address {
    /// Reserved text token for the fee sink sentinel.
    pub const FEE_SINK_TOKEN: &'static str = "__fee__";
    /// Reserved text token for the unknown sentinel.
    pub const UNKNOWN_TOKEN: &'static str = "unknown";

    pub fn is_fee_sink(&self) -> bool {
        matches!(self, Self::FeeSink)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Self::Concrete(_))
    }

    /// The raw payload bytes, or `None` for sentinels.
    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            Self::Concrete(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FeeSink => write!(f, "{}", Self::FEE_SINK_TOKEN),
            Self::Unknown => write!(f, "{}", Self::UNKNOWN_TOKEN),
            Self::Concrete(bytes) => {
                // Raw payload rendering; the network codec owns the real
                // human-readable encoding.
                for b in bytes {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
        }
    }
}
