//! ECDSA signature verification for oracle claims.
//!
//! Signatures are the 65-byte `(r, s, v)` form expected by the Ethereum
//! `ecRecover` precompile; recovery here runs natively on secp256k1 and must
//! agree with what the precompile would return for the same inputs.

use alloy_primitives::{Address, PrimitiveSignature, B256};

use contracts_common::constants::NUM_BYTES_SIGNATURE;

/// An error that occurs during ECDSA recovery or verification
#[derive(Debug, thiserror::Error)]
pub enum EcdsaError {
    /// The signature bytes are not a well-formed 65-byte `(r, s, v)` triple
    #[error("malformed signature: expected {NUM_BYTES_SIGNATURE} bytes of (r, s, v)")]
    MalformedSignature,

    /// The signature did not recover to any public key
    #[error("signature recovery failed")]
    RecoveryFailed,
}

/// Recovers the Ethereum address that produced `signature` over the given
/// (already-prefixed) signing hash
pub fn recover_signer(signing_hash: B256, signature: &[u8]) -> Result<Address, EcdsaError> {
    if signature.len() != NUM_BYTES_SIGNATURE {
        return Err(EcdsaError::MalformedSignature);
    }

    let signature = PrimitiveSignature::try_from(signature)
        .map_err(|_| EcdsaError::MalformedSignature)?;

    signature
        .recover_address_from_prehash(&signing_hash)
        .map_err(|_| EcdsaError::RecoveryFailed)
}

/// Verifies that `signature` over `signing_hash` recovers to the expected
/// signer address
pub fn ecdsa_verify(
    expected_signer: Address,
    signing_hash: B256,
    signature: &[u8],
) -> Result<bool, EcdsaError> {
    Ok(recover_signer(signing_hash, signature)? == expected_signer)
}
