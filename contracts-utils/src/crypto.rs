//! Helpful cryptographic utilities for tests and demos

use alloy::signers::{local::PrivateKeySigner, SignerSync};
use alloy_primitives::{Address, B256, U256};
use rand::{CryptoRng, Rng, RngCore};

use contracts_common::hashing::claim_signing_hash;

/// Generates a random secp256k1 signing keypair, returning the signer and its
/// Ethereum address
pub fn random_keypair() -> (PrivateKeySigner, Address) {
    let signer = PrivateKeySigner::random();
    let address = signer.address();
    (signer, address)
}

/// Draws a random 32-byte staking salt
pub fn random_salt<R: CryptoRng + RngCore>(rng: &mut R) -> B256 {
    let mut bytes = [0u8; 32];
    rng.fill(&mut bytes);
    B256::from(bytes)
}

/// Signs a claim digest for the given deployment with the given key,
/// returning the 65-byte `(r, s, v)` signature the ledger expects.
///
/// Useful for forging-style tests that need signatures from keys other than
/// the configured oracle.
pub fn sign_claim(
    signer: &PrivateKeySigner,
    claimant: Address,
    amount: U256,
    proof_hash: B256,
    nonce: U256,
    chain_id: U256,
    ledger: Address,
) -> Vec<u8> {
    let hash = claim_signing_hash(claimant, amount, proof_hash, nonce, chain_id, ledger);
    let signature = signer
        .sign_hash_sync(&hash)
        .expect("local signer cannot fail");
    signature.as_bytes().to_vec()
}
