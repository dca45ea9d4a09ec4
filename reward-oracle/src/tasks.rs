//! The JSON task protocol between the client orchestrator and the
//! confidential-compute host.
//!
//! Amounts travel as decimal strings: they are 256-bit (or wider, for
//! aggregate totals) quantities that a JSON number cannot carry, and rewards
//! may be negative. Field names are camelCase to match the original wire
//! format.

use alloy_primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

/// A single plaintext stake, as submitted for reward computation.
///
/// This data is handed to the oracle out-of-band and never appears on the
/// public ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeData {
    /// The staked amount, as a decimal string
    pub amount: String,
    /// When the stake was made (unix seconds)
    pub stake_timestamp: u64,
    /// The staking address
    pub user_address: Address,
}

/// An entry of an aggregate-proof request: a full stake opening
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateEntry {
    /// The staked amount, as a decimal string
    pub amount: String,
    /// The owner-held salt
    pub salt: B256,
    /// The staking address
    pub owner: Address,
}

/// A task submitted to the confidential-compute host, discriminated by its
/// `action` field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum TaskRequest {
    /// Compute the reward for a single stake and, when a claim nonce is
    /// supplied and the reward is positive, sign a claim proof for it
    #[serde(rename_all = "camelCase")]
    ComputeRewards {
        /// The plaintext stake
        stake_data: StakeData,
        /// The computation's notion of "now" (unix seconds)
        current_timestamp: u64,
        /// The APY in basis points
        #[serde(rename = "baseAPY")]
        base_apy: u64,
        /// The claimant's expected ledger nonce; absent when the caller only
        /// wants the number, not a signed claim
        #[serde(default, skip_serializing_if = "Option::is_none")]
        nonce: Option<U256>,
    },

    /// Compute rewards for a batch of stakes independently; per-element
    /// failures are isolated
    #[serde(rename_all = "camelCase")]
    ComputeBulkRewards {
        /// The plaintext stakes
        stake_data: Vec<StakeData>,
        /// The computation's notion of "now" (unix seconds)
        current_timestamp: u64,
        /// The APY in basis points
        #[serde(rename = "baseAPY")]
        base_apy: u64,
    },

    /// Recompute a commitment from its opening and report whether it matches
    #[serde(rename_all = "camelCase")]
    VerifyCommitment {
        /// The claimed commitment
        commitment: B256,
        /// The opening's amount, as a decimal string
        amount: String,
        /// The opening's salt
        salt: B256,
        /// The opening's owner
        owner: Address,
    },

    /// Aggregate a batch of openings into publishable totals
    #[serde(rename_all = "camelCase")]
    ComputeAggregateProof {
        /// The stake openings to aggregate
        entries: Vec<AggregateEntry>,
    },
}

/// The signed half of a reward outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofData {
    /// The account the claim mints to
    pub claimant: Address,
    /// The claimable reward, as a decimal string
    pub reward: String,
    /// The computation timestamp bound into the proof hash
    pub timestamp: u64,
    /// The ledger nonce the claim was signed over
    pub nonce: U256,
    /// The oracle's 65-byte recoverable signature
    pub signature: Bytes,
}

/// The outcome of a single reward computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardOutcome {
    /// The computed reward, as a decimal string; may be negative or zero when
    /// the supplied timestamps are out of order
    pub rewards: String,
    /// The unique proof identifier, or the zero hash when no claim was
    /// issuable (non-positive reward, or no nonce supplied)
    pub proof_hash: B256,
    /// The signed claim, when one was issuable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof_data: Option<ProofData>,
}

/// One element's outcome within a bulk computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum BulkItemOutcome {
    /// The element computed cleanly
    #[serde(rename_all = "camelCase")]
    Success {
        /// The computed reward, as a decimal string
        rewards: String,
    },
    /// The element failed; the rest of the batch is unaffected
    #[serde(rename_all = "camelCase")]
    Failure {
        /// Why the element was rejected
        reason: String,
    },
}

/// The roll-up accompanying a bulk computation's per-element outcomes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSummary {
    /// Number of elements submitted
    pub total: u64,
    /// Number of elements that computed cleanly
    pub successful: u64,
    /// Number of elements rejected
    pub failed: u64,
    /// Sum of all successful rewards, as a decimal string
    pub total_rewards: String,
}

/// A completed task's result, discriminated the same way as the request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum TaskResponse {
    /// Result of [`TaskRequest::ComputeRewards`]
    #[serde(rename_all = "camelCase")]
    ComputeRewards {
        /// The single-stake outcome
        #[serde(flatten)]
        outcome: RewardOutcome,
    },

    /// Result of [`TaskRequest::ComputeBulkRewards`]
    #[serde(rename_all = "camelCase")]
    ComputeBulkRewards {
        /// Per-element outcomes, in request order
        results: Vec<BulkItemOutcome>,
        /// The roll-up over the batch
        summary: BulkSummary,
    },

    /// Result of [`TaskRequest::VerifyCommitment`]
    #[serde(rename_all = "camelCase")]
    VerifyCommitment {
        /// Whether the opening matches the commitment
        valid: bool,
    },

    /// Result of [`TaskRequest::ComputeAggregateProof`]
    #[serde(rename_all = "camelCase")]
    ComputeAggregateProof {
        /// The total staked across all entries, as a decimal string
        total_amount: String,
        /// `keccak256` over the concatenated per-entry commitments
        commitments_hash: B256,
        /// The number of entries aggregated
        count: u64,
    },
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = TaskRequest::ComputeRewards {
            stake_data: StakeData {
                amount: "1000000".into(),
                stake_timestamp: 0,
                user_address: address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"),
            },
            current_timestamp: 31_536_000,
            base_apy: 520,
            nonce: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["action"], "computeRewards");
        assert_eq!(json["stakeData"]["amount"], "1000000");
        assert_eq!(json["stakeData"]["stakeTimestamp"], 0);
        assert_eq!(json["currentTimestamp"], 31_536_000u64);
        assert_eq!(json["baseAPY"], 520);
        assert!(json.get("nonce").is_none());

        let roundtrip: TaskRequest = serde_json::from_value(json).unwrap();
        assert_eq!(roundtrip, request);
    }

    #[test]
    fn test_bulk_item_wire_shape() {
        let outcome = BulkItemOutcome::Failure {
            reason: "malformed amount".into(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["reason"], "malformed amount");
    }
}
