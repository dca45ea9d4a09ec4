//! Stateless commitment verification, the oracle-side counterpart of the
//! ledger's membership check

use alloy_primitives::{Address, B256, U256};

use contracts_common::hashing::compute_commitment;

/// Recomputes the commitment for `(amount, salt, owner)` and reports whether
/// it equals the claimed `commitment`.
///
/// Pure predicate with no side effects; a `false` here means the opening does
/// not match, never that anything was mutated.
pub fn verify_commitment(commitment: B256, amount: U256, salt: B256, owner: Address) -> bool {
    compute_commitment(amount, salt, owner) == commitment
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    #[test]
    fn test_matching_opening_accepted() {
        let owner = address!("2222222222222222222222222222222222222222");
        let amount = U256::from(5_000u64);
        let salt = B256::repeat_byte(0x33);

        let commitment = compute_commitment(amount, salt, owner);
        assert!(verify_commitment(commitment, amount, salt, owner));
    }

    #[test]
    fn test_any_mismatch_rejected() {
        let owner = address!("2222222222222222222222222222222222222222");
        let other = address!("3333333333333333333333333333333333333333");
        let amount = U256::from(5_000u64);
        let salt = B256::repeat_byte(0x33);

        let commitment = compute_commitment(amount, salt, owner);
        assert!(!verify_commitment(commitment, amount + U256::from(1), salt, owner));
        assert!(!verify_commitment(commitment, amount, B256::repeat_byte(0x34), owner));
        assert!(!verify_commitment(commitment, amount, salt, other));
    }
}
