use proptest::prelude::*;

use polywallet_types::{Address, Amount, FeeBasis, TxHash};

proptest! {
    /// TxHash roundtrip: new -> as_bytes produces identical bytes.
    #[test]
    fn tx_hash_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = TxHash::new(bytes);
        prop_assert_eq!(hash.as_bytes(), &bytes);
    }

    /// TxHash::is_zero is true only for all-zero bytes.
    #[test]
    fn tx_hash_is_zero_correct(bytes in prop::array::uniform32(0u8..)) {
        let hash = TxHash::new(bytes);
        prop_assert_eq!(hash.is_zero(), bytes == [0u8; 32]);
    }

    /// TxHash JSON serialization roundtrip.
    #[test]
    fn tx_hash_json_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = TxHash::new(bytes);
        let encoded = serde_json::to_string(&hash).unwrap();
        let decoded: TxHash = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, hash);
    }

    /// Amount: raw roundtrip.
    #[test]
    fn amount_raw_roundtrip(raw in 0u128..u128::MAX / 2) {
        let amount = Amount::new(raw);
        prop_assert_eq!(amount.raw(), raw);
    }

    /// Amount: checked_add(a, b) == Some(a + b) when no overflow.
    #[test]
    fn amount_checked_add(a in 0u128..u128::MAX / 2, b in 0u128..u128::MAX / 2) {
        let sum = Amount::new(a).checked_add(Amount::new(b));
        prop_assert_eq!(sum, Some(Amount::new(a + b)));
    }

    /// Amount: checked_sub returns None exactly when b > a.
    #[test]
    fn amount_checked_sub_underflow(a in 0u128..1_000_000, b in 0u128..1_000_000) {
        let result = Amount::new(a).checked_sub(Amount::new(b));
        if b > a {
            prop_assert!(result.is_none());
        } else {
            prop_assert_eq!(result, Some(Amount::new(a - b)));
        }
    }

    /// Amount: saturating_sub never panics and returns ZERO on underflow.
    #[test]
    fn amount_saturating_sub(a in 0u128..1_000_000, b in 0u128..1_000_000) {
        let result = Amount::new(a).saturating_sub(Amount::new(b));
        if b > a {
            prop_assert_eq!(result, Amount::ZERO);
        } else {
            prop_assert_eq!(result, Amount::new(a - b));
        }
    }

    /// Amount: decimal wire text parses back to the same value.
    #[test]
    fn amount_parses_own_decimal_text(raw in 0u128..u128::MAX) {
        let amount = Amount::new(raw);
        prop_assert_eq!(raw.to_string().parse::<Amount>(), Ok(amount));
    }

    /// Amount: is_zero matches raw == 0.
    #[test]
    fn amount_is_zero(raw in 0u128..1_000) {
        let amount = Amount::new(raw);
        prop_assert_eq!(amount.is_zero(), raw == 0);
    }

    /// Concrete addresses are never sentinels, whatever their payload.
    #[test]
    fn concrete_address_is_never_sentinel(payload in prop::collection::vec(any::<u8>(), 0..64)) {
        let addr = Address::Concrete(payload);
        prop_assert!(!addr.is_sentinel());
        prop_assert!(!addr.is_fee_sink());
        prop_assert!(!addr.is_unknown());
    }

    /// FeeBasis: an initial basis never reserves a counter, and its fee
    /// scales with size.
    #[test]
    fn initial_fee_basis_invariants(price in 0u128..1_000_000, size in 0u64..1_000_000) {
        let basis = FeeBasis::Initial {
            price_per_byte: Amount::new(price),
            size_bytes: size,
        };
        prop_assert!(basis.is_initial());
        prop_assert_eq!(basis.counter(), None);
        prop_assert_eq!(basis.fee(), Amount::new(price * size as u128));
    }

    /// FeeBasis JSON roundtrip preserves the stage tag and fields.
    #[test]
    fn fee_basis_json_roundtrip(price in 0u128..1_000_000, size in 0u64..1_000_000) {
        let basis = FeeBasis::Initial {
            price_per_byte: Amount::new(price),
            size_bytes: size,
        };
        let encoded = serde_json::to_string(&basis).unwrap();
        let decoded: FeeBasis = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, basis);
    }
}
