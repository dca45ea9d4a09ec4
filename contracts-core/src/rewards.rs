//! The reward formula the oracle evaluates on plaintext stake data.
//!
//! `reward = floor(amount * apyBps * timeStaked / (10000 * secondsPerYear))`
//!
//! `timeStaked` is the raw difference `currentTimestamp - stakeTimestamp` and
//! may be negative if the caller supplies out-of-order timestamps; the
//! computation does not validate ordering, so a negative delta flows through
//! floor division to a negative (or zero) reward. Callers that mint rewards
//! must therefore gate on positivity; see [`reward_to_u256`].
//!
//! Intermediate products can exceed 256 bits (`amount` is itself a full
//! `uint256`), so the formula is evaluated over arbitrary-precision signed
//! integers.

use alloy_primitives::U256;
use num_bigint::{BigInt, Sign};

use contracts_common::constants::{BPS_DENOMINATOR, NUM_BYTES_U256, SECONDS_PER_YEAR};

/// Computes the reward for a single stake.
///
/// Floor division (toward negative infinity) matches the original oracle's
/// semantics for negative time deltas; for non-negative deltas it coincides
/// with ordinary integer division.
pub fn compute_reward(
    amount: U256,
    stake_timestamp: u64,
    current_timestamp: u64,
    apy_bps: u64,
) -> BigInt {
    let time_staked = BigInt::from(current_timestamp) - BigInt::from(stake_timestamp);
    let amount = BigInt::from_bytes_be(Sign::Plus, &amount.to_be_bytes::<32>());

    let numerator = amount * BigInt::from(apy_bps) * time_staked;
    let denominator = BigInt::from(BPS_DENOMINATOR) * BigInt::from(SECONDS_PER_YEAR);

    floor_div(&numerator, &denominator)
}

/// Converts a computed reward into a `U256` mint amount.
///
/// Returns `None` for negative or zero rewards (nothing mintable) and for the
/// degenerate case of a quotient exceeding 256 bits.
pub fn reward_to_u256(reward: &BigInt) -> Option<U256> {
    if reward.sign() != Sign::Plus {
        return None;
    }

    let (_, bytes) = reward.to_bytes_be();
    if bytes.len() > NUM_BYTES_U256 {
        return None;
    }

    Some(U256::from_be_slice(&bytes))
}

/// Floor division for a positive divisor: rounds the quotient toward negative
/// infinity rather than toward zero
fn floor_div(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;

    if remainder.sign() == Sign::Minus {
        quotient - 1
    } else {
        quotient
    }
}
