//! Implementations of the operational commands

use alloy_primitives::{Address, U256};
use rand::thread_rng;

use contracts_common::types::LedgerConfig;
use contracts_ledger::StakingLedger;
use contracts_utils::{
    crypto::{random_keypair, random_salt},
    mock_erc20::MockErc20,
};
use reward_oracle::{
    tasks::{StakeData, TaskRequest, TaskResponse},
    ComputeHost, InProcessHost, OracleSigner, RewardEngine,
};

use crate::{
    cli::{ComputeRewardArgs, DemoArgs},
    errors::ScriptError,
};

/// The demo deployment's chain id
const CHAIN_ID: u64 = 31337;

/// The demo ledger's address
const LEDGER_ADDRESS: Address = Address::new([
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1e, 0xd6, 0xe0,
]);

/// The demo administrator
const ADMIN: Address = Address::new([0xad; 20]);

/// The demo staker
const STAKER: Address = Address::new([0xaa; 20]);

/// Run the full in-process flow against a fresh ledger and oracle
pub async fn demo(args: DemoArgs) -> Result<(), ScriptError> {
    let amount = U256::from(args.amount);

    // A funded mock asset, a fresh ledger, a fresh oracle key
    let mut token = MockErc20::new(LEDGER_ADDRESS);
    token.fund(STAKER, amount);
    token.approve(STAKER, amount);

    let config = LedgerConfig {
        chain_id: U256::from(CHAIN_ID),
        address: LEDGER_ADDRESS,
        admin: ADMIN,
    };
    let mut ledger = StakingLedger::new(config, token);

    let host = InProcessHost::new(
        RewardEngine::new(),
        OracleSigner::random(U256::from(CHAIN_ID), LEDGER_ADDRESS),
    );
    ledger.set_oracle(ADMIN, host.oracle_address())?;
    println!("oracle configured: {}", host.oracle_address());

    // Stake under a commitment; the ledger records the hash, not the amount
    let salt = random_salt(&mut thread_rng());
    let commitment = ledger.stake(STAKER, amount, salt)?;
    println!("staked {amount} under commitment {commitment}");
    println!(
        "ledger state: total locked {}, receipt balance {}",
        ledger.total_locked(),
        ledger.receipt_balance(STAKER),
    );

    // The oracle computes the reward on the plaintext opening and signs a
    // claim at the staker's current nonce
    let request = TaskRequest::ComputeRewards {
        stake_data: StakeData {
            amount: amount.to_string(),
            stake_timestamp: 0,
            user_address: STAKER,
        },
        current_timestamp: args.duration_secs,
        base_apy: args.apy_bps,
        nonce: Some(ledger.nonce_of(STAKER)),
    };
    let response = host.submit(request).await?;
    let TaskResponse::ComputeRewards { outcome } = response else {
        unreachable!("computeRewards returns a computeRewards response");
    };
    println!("oracle computed reward: {}", outcome.rewards);

    // Claim, then unwind the stake
    if let Some(proof) = outcome.proof_data {
        let reward = U256::from_str_radix(&proof.reward, 10)
            .expect("oracle rewards are decimal uint strings");
        ledger.claim_rewards(
            proof.claimant,
            reward,
            outcome.proof_hash,
            proof.nonce,
            &proof.signature,
        )?;
        println!(
            "claim honored: reward balance {}",
            ledger.reward_balance(STAKER),
        );
    } else {
        println!("no claim issuable for this computation");
    }

    ledger.unstake(STAKER, amount, salt)?;
    println!(
        "unstaked: total locked {}, asset returned {}",
        ledger.total_locked(),
        amount,
    );
    Ok(())
}

/// Generate a fresh oracle keypair and print it
pub fn keygen() -> Result<(), ScriptError> {
    let (signer, address) = random_keypair();
    println!("oracle address: {address}");
    println!("private key:    0x{}", hex::encode(signer.to_bytes()));
    Ok(())
}

/// Run the reward formula once and print the oracle's JSON response
pub async fn compute_reward(args: ComputeRewardArgs) -> Result<(), ScriptError> {
    let host = InProcessHost::new(
        RewardEngine::new(),
        OracleSigner::random(U256::from(CHAIN_ID), LEDGER_ADDRESS),
    );

    let request = TaskRequest::ComputeRewards {
        stake_data: StakeData {
            amount: args.amount,
            stake_timestamp: args.stake_timestamp,
            user_address: STAKER,
        },
        current_timestamp: args.current_timestamp,
        base_apy: args.apy_bps,
        nonce: None,
    };

    let response = host.submit(request).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
