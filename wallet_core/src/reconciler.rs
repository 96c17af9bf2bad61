//! Transfer reconciliation: folding remote bundles into the wallet.
//!
//! Per (hash, uids) identity a transfer moves absent → pending → tracked →
//! updated; the object then lives until an external eviction policy removes
//! it. The reconciler favors availability over strict rejection for
//! remote-sourced data: an unparseable counterparty address still records
//! that a transfer happened, while a malformed hash or amount skips only the
//! bundle that carried it.

use crate::error::WalletError;
use crate::handler::NetworkHandler;
use crate::transfer::{Transfer, TransferState};
use crate::wallet::Wallet;
use polywallet_types::{Amount, FeeBasis, TransferBundle};

/// External collaborator that populates transfer metadata the core does not
/// model (memos, indexer tags, block coordinates).
pub trait TransferAttributeRecovery {
    fn recover(&self, transfer: &mut Transfer, bundle: &TransferBundle);
}

/// Recovery that keeps the bundle's attribute pairs verbatim.
pub struct NoopRecovery;

impl TransferAttributeRecovery for NoopRecovery {
    fn recover(&self, transfer: &mut Transfer, bundle: &TransferBundle) {
        transfer.set_attributes(bundle.attributes.clone());
    }
}

/// What a reconciliation did to the wallet's transfer set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// No prior record existed; a transfer was materialized and registered.
    Created,
    /// An existing transfer was revised in place (uids and state).
    Updated,
}

/// The reconciliation state machine, generic over the network's codecs.
pub struct Reconciler<'a> {
    handler: &'a dyn NetworkHandler,
}

impl<'a> Reconciler<'a> {
    pub fn new(handler: &'a dyn NetworkHandler) -> Self {
        Self { handler }
    }

    /// Fold one bundle into the wallet.
    ///
    /// Address fields decode leniently (malformed → unknown sentinel); the
    /// hash and amount decode strictly and abort this bundle only. All
    /// transient values are either moved into the transfer or dropped here,
    /// on every path.
    pub fn reconcile(
        &self,
        wallet: &mut Wallet,
        bundle: &TransferBundle,
        recovery: &dyn TransferAttributeRecovery,
    ) -> Result<ReconcileOutcome, WalletError> {
        let hash = self.handler.hash_from_string(&bundle.hash)?;
        let amount: Amount = bundle
            .amount
            .parse()
            .map_err(|_| WalletError::MalformedAmount(bundle.amount.clone()))?;

        // An unparseable fee is treated as absent; the transfer itself is
        // still worth recording.
        let fee = bundle
            .fee
            .as_deref()
            .and_then(|f| f.parse::<Amount>().ok())
            .unwrap_or(Amount::ZERO);

        let target = self.handler.address_from_string_lenient(&bundle.to);
        let source = self.handler.address_from_string_lenient(&bundle.from);

        let state =
            TransferState::from_bundle(bundle.transfer_status(), FeeBasis::from_actual_fee(fee));

        if let Some(existing) = wallet.transfer_by_hash_or_uids(Some(&hash), &bundle.uids) {
            existing.set_uids(&*bundle.uids);
            if existing.hash().is_none() {
                existing.set_hash(hash);
            }
            existing.set_state(state);
            recovery.recover(existing, bundle);
            Ok(ReconcileOutcome::Updated)
        } else {
            let mut transfer = Transfer::new(source, target, amount, FeeBasis::default());
            transfer.set_uids(&*bundle.uids);
            transfer.set_hash(hash);
            transfer.set_state(state);
            recovery.recover(&mut transfer, bundle);
            wallet.add_transfer(transfer);
            Ok(ReconcileOutcome::Created)
        }
    }

    /// Fold a batch of bundles, skipping the malformed ones. Returns how
    /// many bundles were applied.
    pub fn reconcile_all(
        &self,
        wallet: &mut Wallet,
        bundles: &[TransferBundle],
        recovery: &dyn TransferAttributeRecovery,
    ) -> usize {
        let network = wallet.network().label();
        let mut applied = 0;
        for bundle in bundles {
            match self.reconcile(wallet, bundle, recovery) {
                Ok(outcome) => {
                    tracing::debug!(%network, uids = %bundle.uids, ?outcome, "reconciled transfer bundle");
                    applied += 1;
                }
                Err(err) => {
                    tracing::warn!(
                        %network,
                        uids = %bundle.uids,
                        hash = %bundle.hash,
                        %err,
                        "skipping malformed transfer bundle"
                    );
                }
            }
        }
        applied
    }
}
