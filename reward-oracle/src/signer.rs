//! The oracle's signing half: turns a computed reward into a claim proof the
//! ledger's verifier will accept.
//!
//! The signing key never leaves this type; callers only ever see the oracle's
//! address and finished signatures.

use alloy::signers::{local::PrivateKeySigner, SignerSync};
use alloy_primitives::{Address, B256, U256};
use num_bigint::BigInt;
use rand::{thread_rng, Rng};

use contracts_common::{
    hashing::{claim_signing_hash, compute_proof_hash},
    types::ClaimProof,
};
use contracts_core::rewards::reward_to_u256;

/// An error issuing a claim proof
#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    /// The computed reward is zero or negative; there is nothing to mint and
    /// therefore nothing to sign
    #[error("reward {0} is not positive; no claim issuable")]
    NonPositiveReward(BigInt),

    /// The underlying key failed to sign
    #[error("signing failed: {0}")]
    Signing(#[from] alloy::signers::Error),
}

/// The oracle's claim signer, bound to one ledger deployment
#[derive(Debug)]
pub struct OracleSigner {
    /// The oracle's secp256k1 key
    signer: PrivateKeySigner,
    /// The chain id bound into every claim digest
    chain_id: U256,
    /// The ledger address bound into every claim digest
    ledger: Address,
}

impl OracleSigner {
    /// Wraps an existing key for the given deployment
    pub fn new(signer: PrivateKeySigner, chain_id: U256, ledger: Address) -> Self {
        Self {
            signer,
            chain_id,
            ledger,
        }
    }

    /// Generates a fresh random key for the given deployment
    pub fn random(chain_id: U256, ledger: Address) -> Self {
        Self::new(PrivateKeySigner::random(), chain_id, ledger)
    }

    /// The oracle's address, the value the ledger administrator configures
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Issues a signed claim for a computed reward.
    ///
    /// The proof hash binds the claimant, the reward, the computation
    /// timestamp, and fresh randomness, so two identical computations still
    /// yield distinct proofs. `nonce` must be the claimant's current expected
    /// ledger nonce; the oracle signs what it is given and relies on the
    /// verifier's strict sequencing for replay safety.
    pub fn issue_claim(
        &self,
        claimant: Address,
        reward: &BigInt,
        timestamp: u64,
        nonce: U256,
    ) -> Result<ClaimProof, SignerError> {
        let amount = reward_to_u256(reward)
            .ok_or_else(|| SignerError::NonPositiveReward(reward.clone()))?;

        let mut randomness = [0u8; 32];
        thread_rng().fill(&mut randomness);
        let proof_hash = compute_proof_hash(claimant, amount, timestamp, B256::from(randomness));

        let signing_hash =
            claim_signing_hash(claimant, amount, proof_hash, nonce, self.chain_id, self.ledger);
        let signature = self.signer.sign_hash_sync(&signing_hash)?;

        Ok(ClaimProof {
            claimant,
            amount,
            proof_hash,
            nonce,
            signature: signature.as_bytes().to_vec().into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use contracts_core::crypto::ecdsa::recover_signer;

    use super::*;

    /// The test deployment's chain id
    const CHAIN_ID: u64 = 31337;
    /// The test deployment's ledger address
    const LEDGER: Address = address!("00000000000000000000000000000000001ed6e0");
    /// The test claimant
    const CLAIMANT: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");

    /// Builds a signer over the test deployment
    fn signer() -> OracleSigner {
        OracleSigner::random(U256::from(CHAIN_ID), LEDGER)
    }

    #[test]
    fn test_claim_recovers_to_oracle() {
        let oracle = signer();
        let claim = oracle
            .issue_claim(CLAIMANT, &BigInt::from(52_000), 1_700_000_000, U256::ZERO)
            .unwrap();

        let hash = claim.signing_hash(U256::from(CHAIN_ID), LEDGER);
        let recovered = recover_signer(hash, &claim.signature).unwrap();
        assert_eq!(recovered, oracle.address());
        assert_eq!(claim.amount, U256::from(52_000u64));
    }

    #[test]
    fn test_identical_computations_distinct_proofs() {
        let oracle = signer();
        let claim_1 = oracle
            .issue_claim(CLAIMANT, &BigInt::from(100), 1_700_000_000, U256::ZERO)
            .unwrap();
        let claim_2 = oracle
            .issue_claim(CLAIMANT, &BigInt::from(100), 1_700_000_000, U256::ZERO)
            .unwrap();

        assert_ne!(claim_1.proof_hash, claim_2.proof_hash);
    }

    #[test]
    fn test_non_positive_rewards_unsignable() {
        let oracle = signer();
        for reward in [BigInt::from(0), BigInt::from(-26)] {
            let err = oracle
                .issue_claim(CLAIMANT, &reward, 1_700_000_000, U256::ZERO)
                .unwrap_err();
            assert!(matches!(err, SignerError::NonPositiveReward(_)));
        }
    }
}
