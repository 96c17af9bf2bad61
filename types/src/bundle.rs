//! Loosely-typed records received from the remote chain-indexing client.
//!
//! Bundles are untrusted input. Numeric fields are decimal ASCII to avoid
//! precision loss across the wire boundary; address and hash fields are the
//! network's text encodings and may be absent, empty, or malformed.

use serde::{Deserialize, Serialize};

/// One observed transfer on the remote chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferBundle {
    /// Transaction hash text, network encoding.
    pub hash: String,
    /// Remote-assigned opaque transfer identifier.
    pub uids: String,
    /// Source address text; may be empty or unparseable.
    #[serde(default)]
    pub from: String,
    /// Target address text; may be empty or unparseable.
    #[serde(default)]
    pub to: String,
    /// Transfer amount, decimal ASCII.
    pub amount: String,
    /// Fee paid, decimal ASCII, absent for incoming transfers.
    #[serde(default)]
    pub fee: Option<String>,
    /// Remote status word ("confirmed", "submitted", "failed").
    pub status: String,
    /// Key/value attribute pairs (fee refinement inputs and transfer
    /// metadata such as `consumed_gas`, `storage_size`, `counter`).
    #[serde(default)]
    pub attributes: Vec<(String, String)>,
}

impl TransferBundle {
    /// Look up an attribute value by key, case-insensitively.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        lookup_attribute(&self.attributes, key)
    }

    /// Parsed status word.
    pub fn transfer_status(&self) -> TransferStatus {
        TransferStatus::parse(&self.status)
    }
}

/// Look up an attribute value by key, case-insensitively.
pub fn lookup_attribute<'a>(attributes: &'a [(String, String)], key: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v.as_str())
}

/// One observed transaction on the remote chain, wrapping the raw payload.
///
/// Only meaningful for networks whose sync model is transaction-based; the
/// transfer-based networks report `UnsupportedOperation` for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionBundle {
    pub hash: String,
    pub status: String,
    /// Raw serialized transaction, hex, when the service provides it.
    #[serde(default)]
    pub raw: Option<String>,
}

/// Remote transfer status, parsed from the bundle's status word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferStatus {
    Confirmed,
    Submitted,
    Failed,
    /// Anything the wallet does not recognize; treated as still in flight.
    Unrecognized,
}

impl TransferStatus {
    pub fn parse(word: &str) -> Self {
        match word.to_ascii_lowercase().as_str() {
            "confirmed" => Self::Confirmed,
            "submitted" | "pending" => Self::Submitted,
            "failed" | "errored" => Self::Failed,
            _ => Self::Unrecognized,
        }
    }
}
