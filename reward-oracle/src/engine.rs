//! The in-enclave computation engine: pure functions over plaintext stake
//! data, delegating the arithmetic to `contracts-core` so the local fallback
//! path and a remote host agree bit-for-bit.

use alloy_primitives::{Address, B256, U256};
use num_bigint::BigInt;

use contracts_core::{
    aggregate::{compute_aggregate_proof, AggregateProof, StakeEntry},
    commitments::verify_commitment,
    rewards::compute_reward,
};

use crate::tasks::{AggregateEntry, BulkItemOutcome, BulkSummary, StakeData};

/// An error rejecting a single computation input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// An amount string did not parse as a decimal 256-bit integer
    #[error("malformed amount {0:?}: expected a decimal uint256 string")]
    MalformedAmount(String),
}

/// The stateless reward computation engine
#[derive(Debug, Default, Clone, Copy)]
pub struct RewardEngine;

impl RewardEngine {
    /// Creates the engine
    pub fn new() -> Self {
        Self
    }

    /// Computes the reward for one stake. Timestamps are taken as given: an
    /// out-of-order pair produces a negative time delta and a negative (or
    /// zero) reward, which the caller observes rather than mints.
    pub fn compute(
        &self,
        stake: &StakeData,
        current_timestamp: u64,
        base_apy: u64,
    ) -> Result<BigInt, EngineError> {
        let amount = parse_amount(&stake.amount)?;
        Ok(compute_reward(
            amount,
            stake.stake_timestamp,
            current_timestamp,
            base_apy,
        ))
    }

    /// Computes rewards for a batch of stakes, isolating per-element
    /// failures: one malformed element must not abort the others.
    ///
    /// Returns the per-element outcomes in request order plus the roll-up
    /// summary. `totalRewards` sums the successful computations only.
    pub fn compute_bulk(
        &self,
        stakes: &[StakeData],
        current_timestamp: u64,
        base_apy: u64,
    ) -> (Vec<BulkItemOutcome>, BulkSummary) {
        let mut results = Vec::with_capacity(stakes.len());
        let mut successful = 0u64;
        let mut total_rewards = BigInt::from(0);

        for stake in stakes {
            match self.compute(stake, current_timestamp, base_apy) {
                Ok(reward) => {
                    successful += 1;
                    total_rewards += &reward;
                    results.push(BulkItemOutcome::Success {
                        rewards: reward.to_string(),
                    });
                }
                Err(err) => {
                    results.push(BulkItemOutcome::Failure {
                        reason: err.to_string(),
                    });
                }
            }
        }

        let summary = BulkSummary {
            total: stakes.len() as u64,
            successful,
            failed: stakes.len() as u64 - successful,
            total_rewards: total_rewards.to_string(),
        };
        (results, summary)
    }

    /// Recomputes a commitment from its opening and compares. Pure predicate;
    /// no state anywhere.
    pub fn verify(
        &self,
        commitment: B256,
        amount: &str,
        salt: B256,
        owner: Address,
    ) -> Result<bool, EngineError> {
        let amount = parse_amount(amount)?;
        Ok(verify_commitment(commitment, amount, salt, owner))
    }

    /// Aggregates a batch of openings into publishable totals
    pub fn aggregate(&self, entries: &[AggregateEntry]) -> Result<AggregateProof, EngineError> {
        let entries = entries
            .iter()
            .map(|entry| {
                Ok(StakeEntry {
                    amount: parse_amount(&entry.amount)?,
                    salt: entry.salt,
                    owner: entry.owner,
                })
            })
            .collect::<Result<Vec<_>, EngineError>>()?;

        Ok(compute_aggregate_proof(&entries))
    }
}

/// Parses a decimal uint256 amount string
fn parse_amount(amount: &str) -> Result<U256, EngineError> {
    U256::from_str_radix(amount.trim(), 10)
        .map_err(|_| EngineError::MalformedAmount(amount.to_string()))
}
