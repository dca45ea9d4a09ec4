//! Aggregate statistics over a batch of stake openings.
//!
//! The oracle uses this to publish totals (total staked, participant count, a
//! digest binding the set of commitments) without revealing any individual
//! entry. Totals are arbitrary-precision: a sum of `uint256` amounts can
//! exceed a native word.

use alloy_primitives::{keccak256, Address, B256, U256};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use contracts_common::hashing::compute_commitment;

/// A single plaintext stake opening, as supplied to the oracle out-of-band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeEntry {
    /// The staked amount
    pub amount: U256,
    /// The owner-held salt
    pub salt: B256,
    /// The staking address
    pub owner: Address,
}

/// The publishable aggregate over a batch of stake entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateProof {
    /// The sum of all entry amounts
    pub total_amount: BigUint,
    /// `keccak256` over the concatenated per-entry commitments, in input order
    pub commitments_hash: B256,
    /// The number of entries aggregated
    pub count: u64,
}

/// Computes the aggregate proof for a batch of stake entries
pub fn compute_aggregate_proof(entries: &[StakeEntry]) -> AggregateProof {
    let mut total_amount = BigUint::from(0u8);
    let mut preimage = Vec::with_capacity(entries.len() * B256::len_bytes());

    for entry in entries {
        let commitment = compute_commitment(entry.amount, entry.salt, entry.owner);
        preimage.extend_from_slice(commitment.as_slice());
        total_amount += BigUint::from_bytes_be(&entry.amount.to_be_bytes::<32>());
    }

    AggregateProof {
        total_amount,
        commitments_hash: keccak256(&preimage),
        count: entries.len() as u64,
    }
}
