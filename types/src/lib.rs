//! Fundamental types for the polywallet multi-chain wallet core.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: addresses, hashes, amounts, fee bases, transfer bundles, and
//! the common error taxonomy. Nothing here knows about any particular
//! network; per-network encoding rules live in the network handler crates.

pub mod address;
pub mod amount;
pub mod bundle;
pub mod error;
pub mod fee;
pub mod hash;
pub mod keys;
pub mod network;

pub use address::Address;
pub use amount::Amount;
pub use bundle::{lookup_attribute, TransactionBundle, TransferBundle, TransferStatus};
pub use error::{DecodeError, EstimationError, SerializationError, UnsupportedOperation};
pub use fee::{FeeBasis, NetworkFee};
pub use hash::TxHash;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use network::{NetworkId, NetworkKind};
