//! Generic wallet core: the per-network handler contract and the transfer
//! reconciliation state machine.
//!
//! A host application drives one [`Wallet`] per (account, network) pair. The
//! remote chain-indexing client hands the wallet manager batches of
//! [`TransferBundle`](polywallet_types::TransferBundle)s; the manager looks
//! up the network's [`NetworkHandler`] in the [`HandlerRegistry`] and feeds
//! each bundle to the [`Reconciler`], which deterministically folds it into
//! the wallet's owned transfer set.
//!
//! Nothing in this crate blocks on I/O. Reconciliation assumes the caller
//! serializes bundles per wallet; codecs and estimators are pure and
//! reentrant.

pub mod account;
pub mod error;
pub mod handler;
pub mod reconciler;
pub mod transfer;
pub mod wallet;

pub use account::Account;
pub use error::WalletError;
pub use handler::{HandlerRegistry, NetworkHandler, SweeperStatus};
pub use reconciler::{
    NoopRecovery, ReconcileOutcome, Reconciler, TransferAttributeRecovery,
};
pub use transfer::{Transfer, TransferState};
pub use wallet::Wallet;
