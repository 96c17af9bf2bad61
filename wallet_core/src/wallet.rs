//! The per-network wallet: owned transfer set plus the account handle.

use crate::account::Account;
use crate::transfer::{Transfer, TransferState};
use polywallet_types::{Address, Amount, NetworkId, TxHash};
use serde::{Deserialize, Serialize};

/// A wallet tracking one account's transfers on one network.
///
/// The wallet is a passive container: the external wallet manager drives
/// reconciliation, submission, and eviction. Lookups and insertions are not
/// atomic as a pair, so the caller must serialize reconciliations per wallet.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Wallet {
    network: NetworkId,
    account: Account,
    /// The wallet's own address, used to classify transfer direction.
    address: Address,
    transfers: Vec<Transfer>,
}

impl Wallet {
    pub fn new(network: NetworkId, account: Account, address: Address) -> Self {
        Self {
            network,
            account,
            address,
            transfers: Vec::new(),
        }
    }

    pub fn network(&self) -> NetworkId {
        self.network
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    pub fn add_transfer(&mut self, transfer: Transfer) {
        self.transfers.push(transfer);
    }

    /// Find a tracked transfer by its (hash, uids) identity. Either
    /// coordinate may have been learned first; uids takes precedence (see
    /// [`Transfer::matches_identity`]).
    pub fn transfer_by_hash_or_uids(
        &mut self,
        hash: Option<&TxHash>,
        uids: &str,
    ) -> Option<&mut Transfer> {
        self.transfers
            .iter_mut()
            .find(|t| t.matches_identity(hash, uids))
    }

    /// Net balance: credits to this wallet's address minus debits from it.
    ///
    /// Outgoing transfers debit amount plus fee; failed outgoing transfers
    /// debit only the fee. Burn transfers originate from this wallet with an
    /// unknown target, so their amount is debited like any other outgoing
    /// value, never folded into the fee.
    pub fn balance(&self) -> Amount {
        let mut credits = Amount::ZERO;
        let mut debits = Amount::ZERO;

        for transfer in &self.transfers {
            if *transfer.target() == self.address {
                credits = credits
                    .checked_add(transfer.amount())
                    .unwrap_or(credits);
            }
            if *transfer.source() == self.address {
                let debit = match transfer.state() {
                    TransferState::Errored { .. } => transfer.fee(),
                    _ => transfer
                        .amount()
                        .checked_add(transfer.fee())
                        .unwrap_or(transfer.amount()),
                };
                debits = debits.checked_add(debit).unwrap_or(debits);
            }
        }

        credits.saturating_sub(debits)
    }

    /// Whether the account still needs its one-time reveal operation.
    ///
    /// The public key is published by the first confirmed outgoing
    /// transfer; until one exists, submissions must bundle a reveal and fee
    /// estimation must price it in.
    pub fn needs_reveal(&self) -> bool {
        !self
            .transfers
            .iter()
            .any(|t| *t.source() == self.address && t.state().is_included())
    }
}
