//! Common types used throughout the staking protocol

use alloy_primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

use crate::hashing::{claim_signing_hash, compute_commitment};

/// The plaintext opening of a stake commitment.
///
/// This pair is held exclusively by the end user (and handed to the oracle
/// out-of-band for reward computation); the ledger only ever sees its hash.
/// Losing it makes the underlying funds permanently unrecoverable through the
/// normal unstake path; that is an accepted property of the scheme, not a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakePosition {
    /// The staked amount
    pub amount: U256,
    /// The user-held secret salt blinding the amount
    pub salt: B256,
}

impl StakePosition {
    /// Computes the commitment this position opens for the given owner
    pub fn commitment(&self, owner: Address) -> B256 {
        compute_commitment(self.amount, self.salt, owner)
    }
}

/// A signed, nonce-bound statement from the reward oracle authorizing a
/// reward mint.
///
/// `signature` is the 65-byte `(r, s, v)` recoverable ECDSA signature over
/// the EIP-191-wrapped claim digest (see [`crate::hashing`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimProof {
    /// The account the reward is minted to
    pub claimant: Address,
    /// The reward amount
    pub amount: U256,
    /// The unique proof identifier; the ledger's replay protection is keyed
    /// on this value
    pub proof_hash: B256,
    /// The claimant's expected nonce at signing time
    pub nonce: U256,
    /// The oracle's recoverable ECDSA signature
    pub signature: Bytes,
}

impl ClaimProof {
    /// The digest the oracle signed, reconstructed for this deployment
    pub fn signing_hash(&self, chain_id: U256, ledger: Address) -> B256 {
        claim_signing_hash(
            self.claimant,
            self.amount,
            self.proof_hash,
            self.nonce,
            chain_id,
            ledger,
        )
    }
}

/// Deployment parameters of a staking ledger instance.
///
/// The chain id and ledger address are part of every claim digest, binding
/// oracle signatures to exactly one deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// The chain id of the deployment
    pub chain_id: U256,
    /// The ledger's own address
    pub address: Address,
    /// The initial administrator, allowed to configure the oracle key
    pub admin: Address,
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    #[test]
    fn test_position_commitment_matches_free_function() {
        let owner = address!("1111111111111111111111111111111111111111");
        let position = StakePosition {
            amount: U256::from(7u64),
            salt: B256::repeat_byte(0x42),
        };

        assert_eq!(
            position.commitment(owner),
            compute_commitment(position.amount, position.salt, owner),
        );
    }
}
