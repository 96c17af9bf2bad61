//! Cryptographic primitives for the polywallet core.
//!
//! - **Ed25519** for transaction signing and verification
//! - **Blake2b** for hashing (operation digests, public-key hashes)
//! - **Base58Check** for the checksummed text encodings used by addresses
//!   and hashes (sha256d checksum, via `bs58`)

pub mod base58;
pub mod hash;
pub mod keys;
pub mod sign;

pub use base58::{base58check_decode, base58check_encode};
pub use hash::{blake2b_160, blake2b_256, blake2b_256_multi};
pub use keys::{keypair_from_private, keypair_from_seed, public_from_private};
pub use sign::{sign_message, verify_signature};
