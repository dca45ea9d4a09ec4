//! Oracle-side end-to-end tests: bulk computation, commitment verification
//! against real ledger state, aggregate proofs, and the flagged local
//! fallback

use alloy_primitives::{Address, B256, U256};
use eyre::Result;
use num_bigint::BigUint;

use contracts_common::constants::SECONDS_PER_YEAR;
use integration::{TestHarness, ALICE, BOB};
use reward_oracle::{
    tasks::{AggregateEntry, BulkItemOutcome, StakeData, TaskRequest, TaskResponse},
    ComputeHost, ComputePath, HostError, InProcessHost, OracleClient, OracleSigner, RewardEngine,
};

/// A remote host double that always reports itself unreachable
struct UnreachableHost;

impl ComputeHost for UnreachableHost {
    async fn submit(&self, _request: TaskRequest) -> Result<TaskResponse, HostError> {
        Err(HostError::Unreachable("connection refused".into()))
    }
}

/// Builds a stake-data record at time zero
fn stake_data(amount: &str, user: Address) -> StakeData {
    StakeData {
        amount: amount.into(),
        stake_timestamp: 0,
        user_address: user,
    }
}

#[tokio::test]
async fn test_bulk_isolates_failures_end_to_end() -> Result<()> {
    let harness = TestHarness::new();

    let request = TaskRequest::ComputeBulkRewards {
        stake_data: vec![
            stake_data("1000000", ALICE),
            stake_data("garbage", ALICE),
            stake_data("2000000", BOB),
        ],
        current_timestamp: SECONDS_PER_YEAR,
        base_apy: 520,
    };

    let TaskResponse::ComputeBulkRewards { results, summary } =
        harness.host.submit(request).await?
    else {
        panic!("wrong response variant");
    };

    assert_eq!(results.len(), 3);
    assert!(matches!(&results[0], BulkItemOutcome::Success { rewards } if rewards == "52000"));
    assert!(matches!(&results[1], BulkItemOutcome::Failure { .. }));
    assert!(matches!(&results[2], BulkItemOutcome::Success { rewards } if rewards == "104000"));

    assert_eq!(summary.total, 3);
    assert_eq!(summary.successful, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.total_rewards, "156000");
    Ok(())
}

#[tokio::test]
async fn test_verify_commitment_against_ledger_state() -> Result<()> {
    let mut harness = TestHarness::new();
    let amount = U256::from(5_000u64);
    let salt = harness.salt();
    let commitment = harness.ledger.stake(ALICE, amount, salt)?;

    // The oracle confirms the opening without touching the ledger
    let request = TaskRequest::VerifyCommitment {
        commitment,
        amount: "5000".into(),
        salt,
        owner: ALICE,
    };
    let TaskResponse::VerifyCommitment { valid } = harness.host.submit(request).await? else {
        panic!("wrong response variant");
    };
    assert!(valid);

    // A wrong amount fails the predicate, and the ledger still has the stake
    let request = TaskRequest::VerifyCommitment {
        commitment,
        amount: "5001".into(),
        salt,
        owner: ALICE,
    };
    let TaskResponse::VerifyCommitment { valid } = harness.host.submit(request).await? else {
        panic!("wrong response variant");
    };
    assert!(!valid);
    assert!(harness.ledger.is_committed(commitment));
    Ok(())
}

#[tokio::test]
async fn test_aggregate_proof_over_ledger_positions() -> Result<()> {
    let mut harness = TestHarness::new();

    let salt_alice = harness.salt();
    let salt_bob = harness.salt();
    harness.ledger.stake(ALICE, U256::from(1_000u64), salt_alice)?;
    harness.ledger.stake(BOB, U256::from(2_500u64), salt_bob)?;

    let request = TaskRequest::ComputeAggregateProof {
        entries: vec![
            AggregateEntry {
                amount: "1000".into(),
                salt: salt_alice,
                owner: ALICE,
            },
            AggregateEntry {
                amount: "2500".into(),
                salt: salt_bob,
                owner: BOB,
            },
        ],
    };

    let TaskResponse::ComputeAggregateProof {
        total_amount,
        commitments_hash,
        count,
    } = harness.host.submit(request).await?
    else {
        panic!("wrong response variant");
    };

    // The aggregate total matches what the ledger custodies, without the
    // proof revealing either individual amount
    assert_eq!(
        total_amount.parse::<BigUint>()?,
        BigUint::from(3_500u64),
    );
    assert_eq!(count, 2);
    assert_ne!(commitments_hash, B256::ZERO);
    assert_eq!(harness.ledger.total_locked(), U256::from(3_500u64));
    Ok(())
}

#[tokio::test]
async fn test_fallback_is_flagged_and_equivalent() -> Result<()> {
    let harness = TestHarness::new();

    let request = TaskRequest::ComputeRewards {
        stake_data: stake_data("1000000", ALICE),
        current_timestamp: SECONDS_PER_YEAR,
        base_apy: 520,
        nonce: None,
    };

    // A client whose remote is down serves the task locally and says so
    let local = InProcessHost::new(
        RewardEngine::new(),
        OracleSigner::random(U256::from(integration::CHAIN_ID), integration::LEDGER_ADDRESS),
    );
    let client = OracleClient::new(Some(UnreachableHost), local);
    let fallback = client.execute(request.clone()).await?;
    assert_eq!(fallback.via, ComputePath::LocalFallback);

    // The fallback result is numerically identical to the healthy path
    let direct = harness.host.submit(request).await?;
    assert_eq!(fallback.response, direct);
    Ok(())
}
