//! The hash constructions the ledger and the oracle must agree on bit-for-bit.
//!
//! All of them are `keccak256` over Solidity's tightly-packed encoding
//! (`abi.encodePacked`), so that an EVM implementation of either half computes
//! identical values. Having a single implementation here, consumed by both
//! `contracts-ledger` and `reward-oracle`, makes the agreement structural
//! rather than something tests have to chase.

use alloy_primitives::{keccak256, utils::eip191_hash_message, Address, B256, U256};
use alloy_sol_types::SolValue;

/// Computes the stake commitment for an `(amount, salt, owner)` triple:
/// `keccak256(abi.encodePacked(uint256 amount, bytes32 salt, address owner))`.
///
/// The owner address being part of the pre-image is what makes commitments
/// owner-bound: a different caller hashing the same `(amount, salt)` pair
/// lands on a different commitment, so cross-caller collisions cannot occur.
pub fn compute_commitment(amount: U256, salt: B256, owner: Address) -> B256 {
    keccak256((amount, salt, owner).abi_encode_packed())
}

/// Computes the raw claim message digest:
/// `keccak256(abi.encodePacked(claimant, amount, proofHash, nonce, chainId, ledger))`.
///
/// The chain id and ledger address bind a claim signature to a single ledger
/// deployment; a signature issued for one deployment recovers to a different
/// digest on any other.
pub fn claim_message_digest(
    claimant: Address,
    amount: U256,
    proof_hash: B256,
    nonce: U256,
    chain_id: U256,
    ledger: Address,
) -> B256 {
    keccak256((claimant, amount, proof_hash, nonce, chain_id, ledger).abi_encode_packed())
}

/// Computes the digest a claim signature is actually made over: the raw claim
/// message digest wrapped in the EIP-191 "personal message" prefix, matching
/// `personal_sign` semantics on the oracle side.
pub fn claim_signing_hash(
    claimant: Address,
    amount: U256,
    proof_hash: B256,
    nonce: U256,
    chain_id: U256,
    ledger: Address,
) -> B256 {
    let digest = claim_message_digest(claimant, amount, proof_hash, nonce, chain_id, ledger);
    eip191_hash_message(digest)
}

/// Computes a reward proof hash:
/// `keccak256(abi.encodePacked(claimant, reward, timestamp, randomness))`.
///
/// `randomness` is fresh per invocation and distinct from any staking salt;
/// it exists purely to make the proof hash unique even for identical reward
/// computations, so the ledger's claimed-set can key replay protection on it.
pub fn compute_proof_hash(
    claimant: Address,
    reward: U256,
    timestamp: u64,
    randomness: B256,
) -> B256 {
    keccak256((claimant, reward, U256::from(timestamp), randomness).abi_encode_packed())
}
