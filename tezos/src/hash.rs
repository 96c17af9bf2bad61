//! Tezos operation-hash codec.
//!
//! Single hash kind, so no prefix discrimination is needed beyond checking
//! the one operation prefix; otherwise the same Base58Check discipline as
//! addresses.

use polywallet_crypto::{base58check_decode, base58check_encode};
use polywallet_types::{DecodeError, TxHash};

/// Version prefix for operation hashes (text form starts with `o`).
pub const PREFIX_OPERATION: [u8; 2] = [5, 116];

const DIGEST_LEN: usize = 32;
const DECODED_LEN: usize = 2 + DIGEST_LEN;

/// Strict decode of an operation hash.
pub fn decode(text: &str) -> Result<TxHash, DecodeError> {
    let bytes = base58check_decode(text)?;
    if bytes.len() != DECODED_LEN {
        return Err(DecodeError::InvalidFormat {
            expected: DECODED_LEN,
            actual: bytes.len(),
        });
    }
    if bytes[..2] != PREFIX_OPERATION {
        return Err(DecodeError::UnknownPrefix);
    }
    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&bytes[2..]);
    Ok(TxHash::new(digest))
}

/// Encode an operation hash to its text form.
pub fn encode(hash: &TxHash) -> String {
    let mut bytes = Vec::with_capacity(DECODED_LEN);
    bytes.extend_from_slice(&PREFIX_OPERATION);
    bytes.extend_from_slice(hash.as_bytes());
    base58check_encode(&bytes)
}
