//! Base58Check encoding, the text discipline shared by addresses and hashes.
//!
//! The checksum is the first four bytes of sha256d over the payload, which is
//! what `bs58`'s `check` feature computes. Network prefixes are part of the
//! payload here; prefix discrimination belongs to the per-network codecs.

use polywallet_types::DecodeError;

/// Encode `payload` (prefix bytes included) as Base58Check text.
pub fn base58check_encode(payload: &[u8]) -> String {
    bs58::encode(payload).with_check().into_string()
}

/// Decode Base58Check text back into the raw payload.
///
/// Fails on non-alphabet characters or a checksum mismatch; length and
/// prefix validation are the caller's job.
pub fn base58check_decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    bs58::decode(text)
        .with_check(None)
        .into_vec()
        .map_err(|e| match e {
            bs58::decode::Error::InvalidChecksum { .. } => DecodeError::BadChecksum,
            other => DecodeError::Base58(other.to_string()),
        })
}
