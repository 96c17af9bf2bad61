//! Network identifier used to select a handler from the registry.

use serde::{Deserialize, Serialize};

/// Identifies one blockchain network (kind + mainnet/testnet).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkId {
    pub kind: NetworkKind,
    pub is_mainnet: bool,
}

impl NetworkId {
    pub fn new(kind: NetworkKind, is_mainnet: bool) -> Self {
        Self { kind, is_mainnet }
    }

    /// Stable text label, e.g. `tezos-mainnet`, for logs and display.
    pub fn label(&self) -> String {
        format!(
            "{}-{}",
            self.kind.as_str(),
            if self.is_mainnet { "mainnet" } else { "testnet" }
        )
    }
}

/// The supported network families. One `NetworkHandler` implementation per
/// variant; new networks extend this enum and register a handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkKind {
    Tezos,
}

impl NetworkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tezos => "tezos",
        }
    }
}
