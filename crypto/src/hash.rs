//! Blake2b hashing.

use blake2::digest::consts::{U20, U32};
use blake2::{Blake2b, Digest};

type Blake2b256 = Blake2b<U32>;
type Blake2b160 = Blake2b<U20>;

/// Compute a 256-bit Blake2b hash of arbitrary data (operation digests,
/// signing payloads).
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn blake2b_256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Compute a 160-bit Blake2b hash, the public-key-hash width used inside
/// addresses.
pub fn blake2b_160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Blake2b160::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 20];
    output.copy_from_slice(&result);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blake2b_256_deterministic() {
        assert_eq!(blake2b_256(b"polywallet"), blake2b_256(b"polywallet"));
    }

    #[test]
    fn blake2b_256_different_inputs() {
        assert_ne!(blake2b_256(b"hello"), blake2b_256(b"world"));
    }

    #[test]
    fn blake2b_160_width_and_determinism() {
        let h = blake2b_160(b"pubkey bytes");
        assert_eq!(h.len(), 20);
        assert_eq!(h, blake2b_160(b"pubkey bytes"));
    }

    #[test]
    fn multi_equivalent_to_concatenation() {
        assert_eq!(
            blake2b_256(b"helloworld"),
            blake2b_256_multi(&[b"hello", b"world"])
        );
    }

    #[test]
    fn blake2b_256_known_vector() {
        let expected =
            hex::decode("0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8")
                .unwrap();
        assert_eq!(blake2b_256(b""), expected[..]);
    }

    #[test]
    fn narrow_digest_is_not_a_truncation() {
        // Blake2b-160 parameterizes the digest length; it must not equal the
        // first 20 bytes of Blake2b-256.
        let wide = blake2b_256(b"same input");
        let narrow = blake2b_160(b"same input");
        assert_ne!(narrow, wide[..20]);
    }
}
