//! Tezos network integration.
//!
//! Implements the wallet-core handler contract for Tezos: Base58Check
//! address and operation-hash codecs, the binary forge format with optional
//! bundled reveal, size-based fee estimation with attribute-driven
//! refinement, and transfer-bundle reconciliation via the shared
//! state machine.

pub mod address;
pub mod fees;
pub mod handler;
pub mod hash;
pub mod transaction;

pub use handler::TezosHandler;
pub use transaction::Transaction;
