//! Shared error taxonomy.
//!
//! Nothing in the wallet core is process-fatal: every failure is scoped to a
//! single address, hash, estimate, or bundle. Callers branch on these values
//! to pick a fallback path (sentinel substitution, default fee basis, skip).

use thiserror::Error;

/// Failure to decode a checksummed text encoding (address or hash).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid base58 text: {0}")]
    Base58(String),

    #[error("checksum mismatch")]
    BadChecksum,

    #[error("unrecognized prefix")]
    UnknownPrefix,

    #[error("invalid format: expected {expected} bytes, got {actual}")]
    InvalidFormat { expected: usize, actual: usize },
}

/// Failure to refine a fee basis from remote cost-accounting attributes.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EstimationError {
    /// A required attribute key is absent or its value is non-numeric.
    #[error("missing or non-numeric attribute: {0}")]
    MissingAttribute(String),

    /// Refinement was asked for a fee basis that is not in the initial stage.
    #[error("fee basis is not an initial estimate")]
    NotInitial,
}

/// Failure to produce a signed wire payload.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SerializationError {
    /// Source or target is a sentinel; sentinels never appear on the wire.
    #[error("cannot serialize a sentinel address")]
    SentinelAddress,

    /// The address exists but has no representation in this wire position
    /// (e.g. a contract address where an implicit source is required).
    #[error("address cannot be forged into the wire format")]
    UnforgeableAddress,

    /// Account state required for signing is missing (e.g. the key behind a
    /// reveal precondition).
    #[error("account precondition not met: {0}")]
    MissingPrecondition(&'static str),

    #[error("invalid signing key")]
    InvalidKey,
}

/// A capability the network declares but does not implement.
///
/// Returned as a value, never panicked, so callers can branch to an
/// alternative flow (e.g. a different signing path).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unsupported operation: {0}")]
pub struct UnsupportedOperation(pub &'static str);
