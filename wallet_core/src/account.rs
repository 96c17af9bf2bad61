//! Opaque per-network account handle.

use polywallet_types::PublicKey;
use serde::{Deserialize, Serialize};

/// The per-network account state a handler needs for serialization and fee
/// estimation: the signing public key plus whatever one-time initialization
/// data the network requires (nothing, for stateless-account networks).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    public_key: PublicKey,
    init_data: Option<Vec<u8>>,
}

impl Account {
    pub fn new(public_key: PublicKey) -> Self {
        Self {
            public_key,
            init_data: None,
        }
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Apply network-specific initialization data (a no-op concept for
    /// networks with stateless accounts; the handler decides what it means).
    pub fn apply_init_data(&mut self, data: Vec<u8>) {
        self.init_data = Some(data);
    }

    pub fn init_data(&self) -> Option<&[u8]> {
        self.init_data.as_deref()
    }
}
