//! Wallet-level transfer: one tracked movement of value.

use polywallet_types::{Address, Amount, FeeBasis, TransferStatus, TxHash};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a tracked transfer.
///
/// Locally created transfers walk Created → Signed → Submitted; remote
/// reconciliation then lands them in Included or Errored. An `Included`
/// state carries the fee basis the chain actually charged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferState {
    Created,
    Signed,
    Submitted,
    Included { fee_basis: FeeBasis },
    Errored { message: String },
}

impl TransferState {
    /// Derive the state a remote bundle implies, attaching `fee_basis` when
    /// the transfer is confirmed on-chain.
    pub fn from_bundle(status: TransferStatus, fee_basis: FeeBasis) -> Self {
        match status {
            TransferStatus::Confirmed => Self::Included { fee_basis },
            TransferStatus::Submitted | TransferStatus::Unrecognized => Self::Submitted,
            TransferStatus::Failed => Self::Errored {
                message: "reported failed by remote service".to_string(),
            },
        }
    }

    pub fn is_included(&self) -> bool {
        matches!(self, Self::Included { .. })
    }
}

/// One transfer owned by a wallet.
///
/// Identity is the (hash, uids) pair: the remote service assigns `uids`
/// once it has seen the transfer, the chain assigns `hash` once it is
/// submitted; either may become known first. A single confirmed hash may be
/// shared by two transfers (the value transfer and a companion burn to the
/// unknown sentinel), which is why uids takes precedence during lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    uids: Option<String>,
    hash: Option<TxHash>,
    source: Address,
    target: Address,
    amount: Amount,
    fee_basis: FeeBasis,
    state: TransferState,
    attributes: Vec<(String, String)>,
}

impl Transfer {
    pub fn new(source: Address, target: Address, amount: Amount, fee_basis: FeeBasis) -> Self {
        Self {
            uids: None,
            hash: None,
            source,
            target,
            amount,
            fee_basis,
            state: TransferState::Created,
            attributes: Vec::new(),
        }
    }

    pub fn uids(&self) -> Option<&str> {
        self.uids.as_deref()
    }

    pub fn set_uids(&mut self, uids: impl Into<String>) {
        self.uids = Some(uids.into());
    }

    pub fn hash(&self) -> Option<&TxHash> {
        self.hash.as_ref()
    }

    pub fn set_hash(&mut self, hash: TxHash) {
        self.hash = Some(hash);
    }

    pub fn source(&self) -> &Address {
        &self.source
    }

    pub fn target(&self) -> &Address {
        &self.target
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn state(&self) -> &TransferState {
        &self.state
    }

    pub fn set_state(&mut self, state: TransferState) {
        self.state = state;
    }

    pub fn fee_basis(&self) -> &FeeBasis {
        &self.fee_basis
    }

    pub fn set_fee_basis(&mut self, fee_basis: FeeBasis) {
        self.fee_basis = fee_basis;
    }

    /// The fee this transfer costs: the confirmed basis once included,
    /// otherwise the current estimate.
    pub fn fee(&self) -> Amount {
        match &self.state {
            TransferState::Included { fee_basis } => fee_basis.fee(),
            _ => self.fee_basis.fee(),
        }
    }

    /// A burn transfer destroys value toward the unknown sentinel. Its
    /// amount reduces balance but is not a fee.
    pub fn is_burn(&self) -> bool {
        self.target.is_unknown()
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn set_attributes(&mut self, attributes: Vec<(String, String)>) {
        self.attributes = attributes;
    }

    /// Identity match against a (hash, uids) pair.
    ///
    /// uids equality always matches. A hash match only counts while this
    /// transfer has no uids yet; once the remote id is known, a shared
    /// hash alone is a sibling (burn pair), not the same transfer.
    pub fn matches_identity(&self, hash: Option<&TxHash>, uids: &str) -> bool {
        if let Some(own) = self.uids.as_deref() {
            return own == uids;
        }
        match (self.hash.as_ref(), hash) {
            (Some(own), Some(other)) => own == other,
            _ => false,
        }
    }
}
