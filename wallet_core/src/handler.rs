//! The per-network handler contract and the registry that dispatches it.
//!
//! Every supported network provides one `NetworkHandler` implementation:
//! address and hash codecs, signing, fee estimation, and bundle recovery.
//! The wallet manager selects a handler from the [`HandlerRegistry`] at
//! construction time, keyed by [`NetworkId`]; there are no global handler
//! tables.

use crate::account::Account;
use crate::error::WalletError;
use crate::reconciler::{ReconcileOutcome, TransferAttributeRecovery};
use crate::transfer::Transfer;
use crate::wallet::Wallet;
use polywallet_types::{
    Address, Amount, DecodeError, EstimationError, FeeBasis, NetworkFee, NetworkId, PrivateKey,
    PublicKey, TransactionBundle, TransferBundle, TxHash, UnsupportedOperation,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Whether a network supports sweeping a paper-wallet key into a wallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweeperStatus {
    Supported,
    /// The network declares no sweeping capability.
    UnsupportedCurrency,
}

/// The contract a network must satisfy to plug into the wallet manager.
///
/// Codec and estimation methods are pure and safe to call concurrently.
/// Capability gaps are reported as values (`UnsupportedOperation`,
/// `SweeperStatus`), never panics, so callers can branch to another flow.
pub trait NetworkHandler: Send + Sync {
    fn network_id(&self) -> NetworkId;

    // ── Address codec ───────────────────────────────────────────────────

    /// Strict parse of a host-supplied address string. Failure yields
    /// absence, never a partially populated address.
    fn address_from_string(&self, text: &str) -> Option<Address>;

    /// Lenient parse for remote-sourced text: sentinel tokens are accepted
    /// and anything absent or malformed degrades to the unknown sentinel.
    fn address_from_string_lenient(&self, text: &str) -> Address;

    fn address_to_string(&self, address: &Address) -> String;

    fn address_from_public_key(&self, public_key: &PublicKey) -> Address;

    // ── Hash codec ──────────────────────────────────────────────────────

    fn hash_from_string(&self, text: &str) -> Result<TxHash, DecodeError>;

    fn hash_to_string(&self, hash: &TxHash) -> String;

    // ── Account initialization (no-ops for stateless-account networks) ──

    fn is_account_initialized(&self, _account: &Account) -> bool {
        true
    }

    fn account_initialization_data(&self, _account: &Account) -> Option<Vec<u8>> {
        None
    }

    fn initialize_account(&self, _account: &mut Account, _data: &[u8]) {}

    // ── Signing ─────────────────────────────────────────────────────────

    /// Produce the signed wire payload for `transfer` using a 32-byte seed.
    fn sign_with_seed(
        &self,
        wallet: &Wallet,
        transfer: &Transfer,
        reference_block: &TxHash,
        seed: &[u8; 32],
    ) -> Result<Vec<u8>, WalletError>;

    /// Produce the signed wire payload using an imported private key.
    /// Networks that only sign from the account seed leave the default.
    fn sign_with_key(
        &self,
        _wallet: &Wallet,
        _transfer: &Transfer,
        _reference_block: &TxHash,
        _key: &PrivateKey,
    ) -> Result<Vec<u8>, WalletError> {
        Err(UnsupportedOperation("sign-with-key").into())
    }

    // ── Fee estimation ──────────────────────────────────────────────────

    /// The most (or least) this wallet can send in one transfer.
    fn estimate_limit(&self, wallet: &Wallet, as_maximum: bool) -> Amount {
        if as_maximum {
            wallet.balance()
        } else {
            Amount::ZERO
        }
    }

    /// Provisional fee basis for a proposed transfer, from a size-only
    /// serialization.
    fn estimate_fee_basis(
        &self,
        wallet: &Wallet,
        target: &Address,
        amount: Amount,
        network_fee: &NetworkFee,
        reference_block: &TxHash,
    ) -> Result<FeeBasis, WalletError>;

    /// Refine an initial fee basis from the remote service's
    /// cost-accounting attributes.
    fn recover_fee_basis_from_estimate(
        &self,
        initial: &FeeBasis,
        network_fee: &NetworkFee,
        attributes: &[(String, String)],
    ) -> Result<FeeBasis, EstimationError>;

    // ── Bundle recovery ─────────────────────────────────────────────────

    /// Recover transfers from a raw transaction bundle. Only meaningful for
    /// networks synced per-transaction; transfer-synced networks keep the
    /// default.
    fn recover_transfers_from_transaction_bundle(
        &self,
        _wallet: &mut Wallet,
        _bundle: &TransactionBundle,
    ) -> Result<(), UnsupportedOperation> {
        Err(UnsupportedOperation("transaction bundles"))
    }

    /// Reconcile one remote transfer bundle into the wallet's transfer set.
    fn recover_transfer_from_transfer_bundle(
        &self,
        wallet: &mut Wallet,
        bundle: &TransferBundle,
        recovery: &dyn TransferAttributeRecovery,
    ) -> Result<ReconcileOutcome, WalletError>;

    // ── Sweeping ────────────────────────────────────────────────────────

    fn sweeper_status(&self, _wallet: &Wallet, _key: &PublicKey) -> SweeperStatus {
        SweeperStatus::UnsupportedCurrency
    }
}

/// Handler registry, keyed by network identifier.
///
/// Built once at wallet-manager construction; immutable afterwards, so
/// lookups need no locking.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<NetworkId, Arc<dyn NetworkHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its own network id. A later registration
    /// for the same id replaces the earlier one.
    pub fn register(&mut self, handler: Arc<dyn NetworkHandler>) {
        self.handlers.insert(handler.network_id(), handler);
    }

    pub fn get(&self, network: NetworkId) -> Option<Arc<dyn NetworkHandler>> {
        self.handlers.get(&network).cloned()
    }

    pub fn supported_networks(&self) -> impl Iterator<Item = NetworkId> + '_ {
        self.handlers.keys().copied()
    }
}
