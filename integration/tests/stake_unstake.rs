//! End-to-end staking tests: the round-trip law and its failure modes

use alloy_primitives::U256;
use eyre::Result;

use contracts_ledger::{CustodyError, LedgerError};
use integration::{TestHarness, ALICE, BOB, STARTING_BALANCE};

#[test]
fn test_stake_unstake_round_trip_law() -> Result<()> {
    let mut harness = TestHarness::new();

    // A spread of amounts, including 1 and a large position
    for amount in [1u64, 5_000, 123_456_789] {
        let amount = U256::from(amount);
        let salt = harness.salt();
        let pre_stake = harness.ledger.custodied_balance();

        let commitment = harness.ledger.stake(ALICE, amount, salt)?;
        assert!(harness.ledger.is_committed(commitment));

        harness.ledger.unstake(ALICE, amount, salt)?;
        assert!(!harness.ledger.is_committed(commitment));
        assert_eq!(harness.ledger.custodied_balance(), pre_stake);
    }

    // Everything returned: Alice's asset balance is back to the start
    assert_eq!(harness.ledger.total_locked(), U256::ZERO);
    assert_eq!(harness.ledger.receipt_balance(ALICE), U256::ZERO);
    Ok(())
}

#[test]
fn test_duplicate_stake_fails_second_time() -> Result<()> {
    let mut harness = TestHarness::new();
    let salt = harness.salt();
    let amount = U256::from(5_000u64);

    harness.ledger.stake(ALICE, amount, salt)?;
    let err = harness.ledger.stake(ALICE, amount, salt).unwrap_err();
    assert!(matches!(err, LedgerError::DuplicateCommitment(_)));
    Ok(())
}

#[test]
fn test_unstake_with_unknown_opening_fails() -> Result<()> {
    let mut harness = TestHarness::new();
    let salt = harness.salt();
    let amount = U256::from(5_000u64);
    harness.ledger.stake(ALICE, amount, salt)?;

    // A salt that was never used
    let err = harness
        .ledger
        .unstake(ALICE, amount, harness.salt())
        .unwrap_err();
    assert!(matches!(err, LedgerError::CommitmentNotFound(_)));

    // An amount that does not match the original
    let err = harness
        .ledger
        .unstake(ALICE, U256::from(4_999u64), salt)
        .unwrap_err();
    assert!(matches!(err, LedgerError::CommitmentNotFound(_)));

    // The position itself is untouched
    assert_eq!(harness.ledger.total_locked(), amount);
    Ok(())
}

#[test]
fn test_owners_cannot_cross_unstake() -> Result<()> {
    let mut harness = TestHarness::new();
    let salt = harness.salt();
    let amount = U256::from(5_000u64);
    harness.ledger.stake(ALICE, amount, salt)?;

    // Bob knows Alice's full opening, but his address changes the hash; the
    // membership lookup is the authorization check
    let err = harness.ledger.unstake(BOB, amount, salt).unwrap_err();
    assert!(matches!(err, LedgerError::CommitmentNotFound(_)));
    Ok(())
}

#[test]
fn test_same_amount_different_owners_distinct_commitments() -> Result<()> {
    let mut harness = TestHarness::new();
    let amount = U256::from(7_777u64);

    let c_alice = harness.ledger.stake(ALICE, amount, harness.salt())?;
    let c_bob = harness.ledger.stake(BOB, amount, harness.salt())?;
    assert_ne!(c_alice, c_bob);

    // The ledger reveals how many positions each owner holds, nothing more
    assert_eq!(harness.ledger.active_commitments(ALICE).len(), 1);
    assert_eq!(harness.ledger.active_commitments(BOB).len(), 1);
    Ok(())
}

#[test]
fn test_exhausted_allowance_propagates() -> Result<()> {
    let mut harness = TestHarness::new();

    // Spend the entire approval in one stake, then try again
    let all = U256::from(STARTING_BALANCE);
    harness.ledger.stake(ALICE, all, harness.salt())?;

    let err = harness
        .ledger
        .stake(ALICE, U256::from(1u64), harness.salt())
        .unwrap_err();
    assert!(matches!(
        err,
        LedgerError::Custody(CustodyError::InsufficientAllowance { .. }),
    ));

    // The failed stake left no commitment behind
    assert_eq!(harness.ledger.active_commitments(ALICE).len(), 1);
    Ok(())
}

#[test]
fn test_total_locked_tracks_all_owners() -> Result<()> {
    let mut harness = TestHarness::new();

    harness.ledger.stake(ALICE, U256::from(1_000u64), harness.salt())?;
    harness.ledger.stake(BOB, U256::from(2_000u64), harness.salt())?;
    assert_eq!(harness.ledger.total_locked(), U256::from(3_000u64));
    assert_eq!(harness.ledger.custodied_balance(), U256::from(3_000u64));
    Ok(())
}
