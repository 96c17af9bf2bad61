use polywallet_types::{DecodeError, EstimationError, SerializationError, UnsupportedOperation};
use thiserror::Error;

/// Errors surfaced by wallet-core operations.
///
/// Every variant is scoped to a single transfer, address, or estimate; a
/// failing bundle is skipped, never the batch.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Estimation(#[from] EstimationError),

    #[error(transparent)]
    Serialization(#[from] SerializationError),

    #[error(transparent)]
    Unsupported(#[from] UnsupportedOperation),

    #[error("malformed amount in bundle: {0:?}")]
    MalformedAmount(String),
}
