//! The Tezos [`NetworkHandler`] implementation.
//!
//! Wires the address and hash codecs, the forge serializer, and the
//! two-stage fee estimator into the handler contract. Sweeping and
//! imported-key signing are left at their unsupported defaults: Tezos
//! wallets here sign only from the account seed.

use crate::transaction::{self, Transaction};
use crate::{address, fees, hash};
use polywallet_core::{
    NetworkHandler, ReconcileOutcome, Reconciler, Transfer, TransferAttributeRecovery, Wallet,
    WalletError,
};
use polywallet_types::{
    Address, Amount, DecodeError, EstimationError, FeeBasis, NetworkFee, NetworkId, NetworkKind,
    PublicKey, SerializationError, TransferBundle, TxHash,
};

pub struct TezosHandler {
    network: NetworkId,
}

impl TezosHandler {
    pub fn new(is_mainnet: bool) -> Self {
        Self {
            network: NetworkId::new(NetworkKind::Tezos, is_mainnet),
        }
    }

    /// Assemble the forgeable transfer for this wallet. Resource limits and
    /// the counter come from the fee basis when refined, defaults otherwise.
    fn build_transaction(
        wallet: &Wallet,
        target: &Address,
        amount: Amount,
        fee_basis: Option<&FeeBasis>,
    ) -> Transaction {
        let (fee, counter, gas_limit, storage_limit) = match fee_basis {
            Some(FeeBasis::Refined {
                gas_limit,
                storage_limit,
                counter,
                fee,
                ..
            }) => (*fee, *counter, *gas_limit, *storage_limit),
            _ => (
                Amount::ZERO,
                0,
                fees::DEFAULT_GAS_LIMIT,
                fees::DEFAULT_STORAGE_LIMIT,
            ),
        };
        Transaction {
            source: wallet.address().clone(),
            destination: target.clone(),
            amount,
            fee,
            counter,
            gas_limit,
            storage_limit,
        }
    }
}

impl NetworkHandler for TezosHandler {
    fn network_id(&self) -> NetworkId {
        self.network
    }

    fn address_from_string(&self, text: &str) -> Option<Address> {
        address::decode(text).ok()
    }

    fn address_from_string_lenient(&self, text: &str) -> Address {
        address::decode_lenient(text)
    }

    fn address_to_string(&self, addr: &Address) -> String {
        address::encode(addr)
    }

    fn address_from_public_key(&self, public_key: &PublicKey) -> Address {
        address::from_public_key(public_key)
    }

    fn hash_from_string(&self, text: &str) -> Result<TxHash, DecodeError> {
        hash::decode(text)
    }

    fn hash_to_string(&self, h: &TxHash) -> String {
        hash::encode(h)
    }

    fn sign_with_seed(
        &self,
        wallet: &Wallet,
        transfer: &Transfer,
        reference_block: &TxHash,
        seed: &[u8; 32],
    ) -> Result<Vec<u8>, WalletError> {
        // Submission needs a reserved counter, so the fee basis must have
        // been refined first.
        if transfer.fee_basis().counter().is_none() {
            return Err(SerializationError::MissingPrecondition("refined fee basis").into());
        }
        let tx = Self::build_transaction(
            wallet,
            transfer.target(),
            transfer.amount(),
            Some(transfer.fee_basis()),
        );
        let bytes = transaction::serialize_for_submission(
            &tx,
            wallet.account().public_key(),
            reference_block,
            wallet.needs_reveal(),
            seed,
        )?;
        Ok(bytes)
    }

    fn estimate_fee_basis(
        &self,
        wallet: &Wallet,
        target: &Address,
        amount: Amount,
        network_fee: &NetworkFee,
        reference_block: &TxHash,
    ) -> Result<FeeBasis, WalletError> {
        let tx = Self::build_transaction(wallet, target, amount, None);
        let bytes = transaction::serialize_for_fee_estimation(
            &tx,
            wallet.account().public_key(),
            reference_block,
            wallet.needs_reveal(),
        )?;
        Ok(fees::estimate_initial(network_fee, bytes.len() as u64))
    }

    fn recover_fee_basis_from_estimate(
        &self,
        initial: &FeeBasis,
        network_fee: &NetworkFee,
        attributes: &[(String, String)],
    ) -> Result<FeeBasis, EstimationError> {
        fees::refine(initial, network_fee, attributes)
    }

    fn recover_transfer_from_transfer_bundle(
        &self,
        wallet: &mut Wallet,
        bundle: &TransferBundle,
        recovery: &dyn TransferAttributeRecovery,
    ) -> Result<ReconcileOutcome, WalletError> {
        Reconciler::new(self).reconcile(wallet, bundle, recovery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polywallet_core::{Account, SweeperStatus, TransferState};
    use polywallet_crypto::keypair_from_seed;
    use polywallet_types::{Amount, PrivateKey, TransactionBundle, UnsupportedOperation};

    fn seeded_wallet(seed: &[u8; 32]) -> Wallet {
        let kp = keypair_from_seed(seed);
        let addr = address::from_public_key(&kp.public);
        Wallet::new(
            NetworkId::new(NetworkKind::Tezos, false),
            Account::new(kp.public),
            addr,
        )
    }

    fn some_target() -> Address {
        address::from_public_key(&keypair_from_seed(&[9u8; 32]).public)
    }

    #[test]
    fn codec_roundtrips_through_handler() {
        let h = TezosHandler::new(true);
        let addr = some_target();
        let text = h.address_to_string(&addr);
        assert_eq!(h.address_from_string(&text), Some(addr));

        let hash = TxHash::new([0x42; 32]);
        let text = h.hash_to_string(&hash);
        assert_eq!(h.hash_from_string(&text).unwrap(), hash);
    }

    #[test]
    fn strict_parse_rejects_sentinels_lenient_accepts() {
        let h = TezosHandler::new(true);
        assert_eq!(h.address_from_string("__fee__"), None);
        assert_eq!(h.address_from_string("unknown"), None);
        assert_eq!(h.address_from_string_lenient("__fee__"), Address::FeeSink);
        assert_eq!(h.address_from_string_lenient(""), Address::Unknown);
    }

    #[test]
    fn estimate_prices_unrevealed_wallet_higher() {
        let seed = [3u8; 32];
        let unrevealed = seeded_wallet(&seed);
        let fee = NetworkFee::new(Amount::new(100));
        let branch = TxHash::new([0xBB; 32]);
        let h = TezosHandler::new(false);

        let basis = h
            .estimate_fee_basis(&unrevealed, &some_target(), Amount::new(500), &fee, &branch)
            .unwrap();
        assert!(basis.is_initial());

        // A wallet with a confirmed outgoing transfer skips the reveal and
        // serializes shorter.
        let mut revealed = seeded_wallet(&seed);
        let mut out = Transfer::new(
            revealed.address().clone(),
            some_target(),
            Amount::new(1),
            FeeBasis::default(),
        );
        out.set_state(TransferState::Included {
            fee_basis: FeeBasis::default(),
        });
        revealed.add_transfer(out);

        let revealed_basis = h
            .estimate_fee_basis(&revealed, &some_target(), Amount::new(500), &fee, &branch)
            .unwrap();
        assert!(revealed_basis.size_bytes() < basis.size_bytes());
        assert!(revealed_basis.fee() < basis.fee());
    }

    #[test]
    fn estimate_rejects_sentinel_target() {
        let wallet = seeded_wallet(&[3u8; 32]);
        let h = TezosHandler::new(false);
        let err = h
            .estimate_fee_basis(
                &wallet,
                &Address::Unknown,
                Amount::new(1),
                &NetworkFee::new(Amount::new(1)),
                &TxHash::new([0; 32]),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            WalletError::Serialization(SerializationError::SentinelAddress)
        ));
    }

    #[test]
    fn sign_requires_refined_fee_basis() {
        let seed = [3u8; 32];
        let wallet = seeded_wallet(&seed);
        let h = TezosHandler::new(false);

        let transfer = Transfer::new(
            wallet.address().clone(),
            some_target(),
            Amount::new(500),
            FeeBasis::Initial {
                price_per_byte: Amount::new(100),
                size_bytes: 217,
            },
        );
        let err = h
            .sign_with_seed(&wallet, &transfer, &TxHash::new([0xBB; 32]), &seed)
            .unwrap_err();
        assert!(matches!(
            err,
            WalletError::Serialization(SerializationError::MissingPrecondition(_))
        ));
    }

    #[test]
    fn estimate_then_refine_then_sign() {
        let seed = [3u8; 32];
        let wallet = seeded_wallet(&seed);
        let fee = NetworkFee::new(Amount::new(100));
        let branch = TxHash::new([0xBB; 32]);
        let h = TezosHandler::new(false);

        let initial = h
            .estimate_fee_basis(&wallet, &some_target(), Amount::new(500), &fee, &branch)
            .unwrap();
        let refined = h
            .recover_fee_basis_from_estimate(
                &initial,
                &fee,
                &[
                    ("consumed_gas".to_string(), "10000".to_string()),
                    ("storage_size".to_string(), "0".to_string()),
                    ("counter".to_string(), "7".to_string()),
                ],
            )
            .unwrap();
        assert_eq!(refined.counter(), Some(8));

        let transfer = Transfer::new(
            wallet.address().clone(),
            some_target(),
            Amount::new(500),
            refined,
        );
        let signed = h
            .sign_with_seed(&wallet, &transfer, &branch, &seed)
            .unwrap();
        // Branch hash leads, Ed25519 signature trails.
        assert_eq!(signed[..32], [0xBB; 32]);
        assert!(signed.len() > 32 + 64);
    }

    #[test]
    fn unsupported_capabilities_stay_unsupported() {
        let seed = [3u8; 32];
        let mut wallet = seeded_wallet(&seed);
        let h = TezosHandler::new(false);

        let transfer = Transfer::new(
            wallet.address().clone(),
            some_target(),
            Amount::new(1),
            FeeBasis::default(),
        );
        let err = h
            .sign_with_key(
                &wallet,
                &transfer,
                &TxHash::new([0; 32]),
                &PrivateKey([1u8; 32]),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            WalletError::Unsupported(UnsupportedOperation("sign-with-key"))
        ));

        assert_eq!(
            h.sweeper_status(&wallet, &PublicKey([1u8; 32])),
            SweeperStatus::UnsupportedCurrency
        );

        // Tezos syncs per transfer; raw transaction bundles are declined.
        let bundle = TransactionBundle {
            hash: "oo1".into(),
            status: "confirmed".into(),
            raw: None,
        };
        assert_eq!(
            h.recover_transfers_from_transaction_bundle(&mut wallet, &bundle),
            Err(UnsupportedOperation("transaction bundles"))
        );
    }

    #[test]
    fn estimate_limit_defaults() {
        let wallet = seeded_wallet(&[3u8; 32]);
        let h = TezosHandler::new(false);
        assert_eq!(h.estimate_limit(&wallet, true), wallet.balance());
        assert_eq!(h.estimate_limit(&wallet, false), Amount::ZERO);
    }
}
