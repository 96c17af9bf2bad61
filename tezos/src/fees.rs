//! Two-stage fee estimation.
//!
//! Stage one prices a size-only serialization: the transfer is forged with a
//! zero-filled signature placeholder and defaulted resource limits, and the
//! fee is the network's per-byte price times that length. Stage two refines
//! the estimate from the remote service's cost-accounting attributes
//! (`consumed_gas`, `storage_size`, `counter`), padding the reported
//! consumption and reserving the next anti-replay counter value.

use polywallet_types::{lookup_attribute, Amount, EstimationError, FeeBasis, NetworkFee};

/// Gas limit assumed for the size-only serialization. Generous enough for a
/// plain transfer with a bundled reveal.
pub const DEFAULT_GAS_LIMIT: u64 = 10_600;

/// Storage limit assumed for the size-only serialization. Covers allocation
/// of a previously empty destination account.
pub const DEFAULT_STORAGE_LIMIT: u64 = 257;

/// Safety margin applied to reported resource consumption.
fn pad(value: u64) -> u64 {
    value.saturating_add(value / 10)
}

/// Stage one: price a serialized byte length.
pub fn estimate_initial(network_fee: &NetworkFee, size_bytes: u64) -> FeeBasis {
    FeeBasis::Initial {
        price_per_byte: network_fee.price_per_byte(),
        size_bytes,
    }
}

fn numeric_attribute(attributes: &[(String, String)], key: &str) -> Result<u64, EstimationError> {
    lookup_attribute(attributes, key)
        .and_then(|value| value.trim().parse::<u64>().ok())
        .ok_or_else(|| EstimationError::MissingAttribute(key.to_string()))
}

/// Stage two: refine an initial estimate from remote cost accounting.
///
/// Deterministic in its inputs. The reported `counter` is the last value the
/// chain consumed for this account; the refined basis reserves the next one.
pub fn refine(
    initial: &FeeBasis,
    network_fee: &NetworkFee,
    attributes: &[(String, String)],
) -> Result<FeeBasis, EstimationError> {
    if !initial.is_initial() {
        return Err(EstimationError::NotInitial);
    }

    let consumed_gas = numeric_attribute(attributes, "consumed_gas")?;
    let storage_size = numeric_attribute(attributes, "storage_size")?;
    let counter = numeric_attribute(attributes, "counter")?;

    let size_bytes = initial.size_bytes();
    Ok(FeeBasis::Refined {
        price_per_byte: network_fee.price_per_byte(),
        size_bytes,
        gas_limit: pad(consumed_gas),
        storage_limit: pad(storage_size),
        counter: counter.saturating_add(1),
        fee: network_fee.price_per_byte().saturating_mul(size_bytes as u128),
    })
}
