//! Tezos address codec.
//!
//! Text form is Base58Check over a 3-byte version prefix plus the 20-byte
//! Blake2b hash of the key (or contract id). The canonical binary payload
//! stored in [`Address::Concrete`] is 21 bytes: one kind byte followed by
//! the hash, which is also the implicit-source layout the forge format uses.

use polywallet_crypto::{base58check_decode, base58check_encode, blake2b_160};
use polywallet_types::{Address, DecodeError, PublicKey};

/// Base58Check version prefixes, per the Tezos specification.
pub const PREFIX_TZ1: [u8; 3] = [6, 161, 159];
pub const PREFIX_TZ2: [u8; 3] = [6, 161, 161];
pub const PREFIX_TZ3: [u8; 3] = [6, 161, 164];
pub const PREFIX_KT1: [u8; 3] = [2, 90, 121];

/// Kind byte stored at payload[0]. 0..=2 are the implicit key-hash kinds
/// (matching the wire tags), 3 is an originated contract.
pub const KIND_TZ1: u8 = 0;
pub const KIND_TZ2: u8 = 1;
pub const KIND_TZ3: u8 = 2;
pub const KIND_KT1: u8 = 3;

const HASH_LEN: usize = 20;
const PAYLOAD_LEN: usize = 1 + HASH_LEN;
const DECODED_LEN: usize = 3 + HASH_LEN;

fn prefix_for_kind(kind: u8) -> Option<[u8; 3]> {
    match kind {
        KIND_TZ1 => Some(PREFIX_TZ1),
        KIND_TZ2 => Some(PREFIX_TZ2),
        KIND_TZ3 => Some(PREFIX_TZ3),
        KIND_KT1 => Some(PREFIX_KT1),
        _ => None,
    }
}

fn kind_for_prefix(prefix: &[u8]) -> Option<u8> {
    match prefix {
        p if p == PREFIX_TZ1 => Some(KIND_TZ1),
        p if p == PREFIX_TZ2 => Some(KIND_TZ2),
        p if p == PREFIX_TZ3 => Some(KIND_TZ3),
        p if p == PREFIX_KT1 => Some(KIND_KT1),
        _ => None,
    }
}

/// Strict decode: checksummed text with a recognized prefix, or an error.
pub fn decode(text: &str) -> Result<Address, DecodeError> {
    let bytes = base58check_decode(text)?;
    if bytes.len() != DECODED_LEN {
        return Err(DecodeError::InvalidFormat {
            expected: DECODED_LEN,
            actual: bytes.len(),
        });
    }
    let kind = kind_for_prefix(&bytes[..3]).ok_or(DecodeError::UnknownPrefix)?;

    let mut payload = Vec::with_capacity(PAYLOAD_LEN);
    payload.push(kind);
    payload.extend_from_slice(&bytes[3..]);
    Ok(Address::Concrete(payload))
}

/// Lenient decode for remote-sourced text: recognizes the sentinel tokens,
/// maps empty input to the unknown sentinel, and degrades anything
/// undecodable to the unknown sentinel instead of failing.
pub fn decode_lenient(text: &str) -> Address {
    match text {
        "" | Address::UNKNOWN_TOKEN => Address::Unknown,
        Address::FEE_SINK_TOKEN => Address::FeeSink,
        other => decode(other).unwrap_or(Address::Unknown),
    }
}

/// Encode to text: sentinels render to their reserved tokens, concrete
/// addresses to Base58Check with the kind's version prefix.
pub fn encode(address: &Address) -> String {
    match address {
        Address::FeeSink => Address::FEE_SINK_TOKEN.to_string(),
        Address::Unknown => Address::UNKNOWN_TOKEN.to_string(),
        Address::Concrete(payload) => {
            let prefix = payload
                .first()
                .copied()
                .and_then(prefix_for_kind)
                .filter(|_| payload.len() == PAYLOAD_LEN);
            match prefix {
                Some(prefix) => {
                    let mut bytes = Vec::with_capacity(DECODED_LEN);
                    bytes.extend_from_slice(&prefix);
                    bytes.extend_from_slice(&payload[1..]);
                    base58check_encode(&bytes)
                }
                // Foreign payload bytes; raw rendering is the only option.
                None => address.to_string(),
            }
        }
    }
}

/// Derive a tz1 address from an Ed25519 public key.
pub fn from_public_key(public_key: &PublicKey) -> Address {
    let hash = blake2b_160(public_key.as_bytes());
    let mut payload = Vec::with_capacity(PAYLOAD_LEN);
    payload.push(KIND_TZ1);
    payload.extend_from_slice(&hash);
    Address::Concrete(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn concrete(kind: u8, fill: u8) -> Address {
        let mut payload = vec![kind];
        payload.extend_from_slice(&[fill; HASH_LEN]);
        Address::Concrete(payload)
    }

    #[test]
    fn roundtrip_every_kind() {
        for kind in [KIND_TZ1, KIND_TZ2, KIND_TZ3, KIND_KT1] {
            let addr = concrete(kind, 0x5C);
            let text = encode(&addr);
            assert_eq!(decode(&text).unwrap(), addr);
        }
    }

    #[test]
    fn text_prefixes_match_network_convention() {
        assert!(encode(&concrete(KIND_TZ1, 1)).starts_with("tz1"));
        assert!(encode(&concrete(KIND_TZ2, 1)).starts_with("tz2"));
        assert!(encode(&concrete(KIND_TZ3, 1)).starts_with("tz3"));
        assert!(encode(&concrete(KIND_KT1, 1)).starts_with("KT1"));
    }

    #[test]
    fn sentinel_tokens_are_stable() {
        assert_eq!(encode(&Address::FeeSink), "__fee__");
        assert_eq!(encode(&Address::Unknown), "unknown");
        assert_eq!(decode_lenient("__fee__"), Address::FeeSink);
        assert_eq!(decode_lenient("unknown"), Address::Unknown);
    }

    #[test]
    fn lenient_empty_is_unknown() {
        assert_eq!(decode_lenient(""), Address::Unknown);
    }

    #[test]
    fn lenient_garbage_is_unknown() {
        assert_eq!(decode_lenient("definitely not an address"), Address::Unknown);
        assert_eq!(decode_lenient("tz1tooshort"), Address::Unknown);
    }

    #[test]
    fn strict_rejects_sentinel_tokens() {
        // Strict mode is for host-supplied addresses; reserved tokens are
        // not valid on-chain text.
        assert!(decode("unknown").is_err());
        assert!(decode("__fee__").is_err());
    }

    #[test]
    fn strict_rejects_foreign_prefix() {
        // A valid Base58Check string whose version bytes are not a known
        // address prefix.
        let mut bytes = vec![9u8, 9, 9];
        bytes.extend_from_slice(&[0u8; HASH_LEN]);
        let text = polywallet_crypto::base58check_encode(&bytes);
        assert_eq!(decode(&text), Err(DecodeError::UnknownPrefix));
    }

    #[test]
    fn strict_rejects_wrong_length() {
        let text = polywallet_crypto::base58check_encode(&[6u8, 161, 159, 1, 2, 3]);
        assert!(matches!(
            decode(&text),
            Err(DecodeError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn derivation_is_deterministic_and_tz1() {
        let pk = PublicKey([7u8; 32]);
        let a = from_public_key(&pk);
        let b = from_public_key(&pk);
        assert_eq!(a, b);
        assert!(encode(&a).starts_with("tz1"));
    }

    proptest! {
        #[test]
        fn roundtrip_any_hash(kind in 0u8..4, hash in proptest::array::uniform20(any::<u8>())) {
            let mut payload = vec![kind];
            payload.extend_from_slice(&hash);
            let addr = Address::Concrete(payload);
            prop_assert_eq!(decode(&encode(&addr)).unwrap(), addr);
        }

        #[test]
        fn lenient_never_panics(text in ".{0,80}") {
            let _ = decode_lenient(&text);
        }
    }
}
