//! Operation forging: the Tezos wire format for transfers.
//!
//! Two renderings share every encoding rule (field order, zarith varints,
//! fixed-width hashes): the submission form carries a real Ed25519
//! signature, the fee-estimation form a zero-filled placeholder of the same
//! width. Keeping them byte-compatible is what makes size-based fee
//! estimation safe.

use polywallet_crypto::{blake2b_256_multi, keypair_from_seed, sign_message};
use polywallet_types::{Address, Amount, PublicKey, SerializationError, Signature, TxHash};

pub const TAG_REVEAL: u8 = 0x6b;
pub const TAG_TRANSACTION: u8 = 0x6c;

/// Watermark prepended to the forged bytes before hashing for signature.
const WATERMARK_GENERIC: u8 = 0x03;
/// Public-key tag inside a reveal (Ed25519).
const TAG_PUBKEY_ED25519: u8 = 0x00;

const IMPLICIT_LEN: usize = 21;
const KIND_CONTRACT: u8 = 3;

/// One transfer operation, ready to forge.
///
/// `counter` is the account's next anti-replay sequence value; when a reveal
/// is bundled it consumes that slot and the transaction takes the one after.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub source: Address,
    pub destination: Address,
    pub amount: Amount,
    pub fee: Amount,
    pub counter: u64,
    pub gas_limit: u64,
    pub storage_limit: u64,
}

/// Append an unsigned zarith varint: 7 bits per byte, low-order first,
/// high bit set on continuation.
fn push_zarith(buf: &mut Vec<u8>, mut value: u128) {
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        buf.push(byte);
        if value == 0 {
            break;
        }
    }
}

/// The 21-byte implicit-account form required for operation sources.
fn implicit_bytes(address: &Address) -> Result<&[u8], SerializationError> {
    match address {
        Address::Concrete(payload)
            if payload.len() == IMPLICIT_LEN && payload[0] < KIND_CONTRACT =>
        {
            Ok(payload)
        }
        Address::Concrete(_) => Err(SerializationError::UnforgeableAddress),
        _ => Err(SerializationError::SentinelAddress),
    }
}

/// The 22-byte destination form: tagged implicit account or originated
/// contract.
fn destination_bytes(address: &Address) -> Result<Vec<u8>, SerializationError> {
    match address {
        Address::Concrete(payload) if payload.len() == IMPLICIT_LEN => {
            let mut out = Vec::with_capacity(22);
            if payload[0] < KIND_CONTRACT {
                out.push(0x00);
                out.extend_from_slice(payload);
            } else {
                out.push(0x01);
                out.extend_from_slice(&payload[1..]);
                out.push(0x00); // contract padding byte
            }
            Ok(out)
        }
        Address::Concrete(_) => Err(SerializationError::UnforgeableAddress),
        _ => Err(SerializationError::SentinelAddress),
    }
}

/// Forge the unsigned operation group: branch, optional reveal, transaction.
fn forge_unsigned(
    tx: &Transaction,
    public_key: &PublicKey,
    branch: &TxHash,
    needs_reveal: bool,
) -> Result<Vec<u8>, SerializationError> {
    let source = implicit_bytes(&tx.source)?;
    let destination = destination_bytes(&tx.destination)?;

    let mut buf = Vec::with_capacity(128);
    buf.extend_from_slice(branch.as_bytes());

    let mut counter = tx.counter;
    if needs_reveal {
        buf.push(TAG_REVEAL);
        buf.extend_from_slice(source);
        push_zarith(&mut buf, tx.fee.raw());
        push_zarith(&mut buf, counter as u128);
        push_zarith(&mut buf, tx.gas_limit as u128);
        push_zarith(&mut buf, tx.storage_limit as u128);
        buf.push(TAG_PUBKEY_ED25519);
        buf.extend_from_slice(public_key.as_bytes());
        counter += 1;
    }

    buf.push(TAG_TRANSACTION);
    buf.extend_from_slice(source);
    push_zarith(&mut buf, tx.fee.raw());
    push_zarith(&mut buf, counter as u128);
    push_zarith(&mut buf, tx.gas_limit as u128);
    push_zarith(&mut buf, tx.storage_limit as u128);
    push_zarith(&mut buf, tx.amount.raw());
    buf.extend_from_slice(&destination);
    buf.push(0x00); // no parameters

    Ok(buf)
}

/// Unsigned rendering for size measurement only, never submitted. The
/// zero-filled signature placeholder keeps the length identical to the
/// submission form.
pub fn serialize_for_fee_estimation(
    tx: &Transaction,
    public_key: &PublicKey,
    branch: &TxHash,
    needs_reveal: bool,
) -> Result<Vec<u8>, SerializationError> {
    let mut bytes = forge_unsigned(tx, public_key, branch, needs_reveal)?;
    bytes.extend_from_slice(Signature::DUMMY.as_bytes());
    Ok(bytes)
}

/// Fully signed wire payload.
///
/// The seed must derive the account's public key; a mismatch means the
/// caller is signing for the wrong account and fails before any bytes are
/// produced.
pub fn serialize_for_submission(
    tx: &Transaction,
    account_public_key: &PublicKey,
    branch: &TxHash,
    needs_reveal: bool,
    seed: &[u8; 32],
) -> Result<Vec<u8>, SerializationError> {
    let keypair = keypair_from_seed(seed);
    if keypair.public != *account_public_key {
        return Err(SerializationError::InvalidKey);
    }

    let mut bytes = forge_unsigned(tx, &keypair.public, branch, needs_reveal)?;
    let digest = blake2b_256_multi(&[&[WATERMARK_GENERIC], &bytes]);
    let signature = sign_message(&digest, &keypair.private);
    bytes.extend_from_slice(signature.as_bytes());
    Ok(bytes)
}
