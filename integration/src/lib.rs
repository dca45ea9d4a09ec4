//! Shared harness for the end-to-end tests: a funded ledger over the mock
//! asset, wired to an in-process oracle whose address is already configured.

use alloy_primitives::{Address, B256, U256};
use rand::thread_rng;

use contracts_common::types::{ClaimProof, LedgerConfig};
use contracts_ledger::{LedgerError, StakingLedger};
use contracts_utils::{crypto::random_salt, mock_erc20::MockErc20};
use reward_oracle::{tasks::ProofData, InProcessHost, OracleSigner, RewardEngine};

/// The test deployment's chain id
pub const CHAIN_ID: u64 = 31337;

/// The ledger's own address
pub const LEDGER_ADDRESS: Address = Address::new([
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1e, 0xd6, 0xe0,
]);

/// The administrator account
pub const ADMIN: Address = Address::new([
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0a, 0xd0,
]);

/// A funded staker
pub const ALICE: Address = Address::new([0xaa; 20]);

/// A funded staker
pub const BOB: Address = Address::new([0xbb; 20]);

/// The balance every staker starts with
pub const STARTING_BALANCE: u64 = 1_000_000_000;

/// A funded ledger plus its configured in-process oracle
pub struct TestHarness {
    /// The ledger under test
    pub ledger: StakingLedger<MockErc20>,
    /// The in-process oracle host, already configured as the ledger's signer
    pub host: InProcessHost,
}

impl TestHarness {
    /// Builds the harness: Alice and Bob funded and fully approved, the
    /// oracle key generated and configured on the ledger
    pub fn new() -> Self {
        let mut token = MockErc20::new(LEDGER_ADDRESS);
        for account in [ALICE, BOB] {
            token.fund(account, U256::from(STARTING_BALANCE));
            token.approve(account, U256::from(STARTING_BALANCE));
        }

        let config = LedgerConfig {
            chain_id: U256::from(CHAIN_ID),
            address: LEDGER_ADDRESS,
            admin: ADMIN,
        };
        let mut ledger = StakingLedger::new(config, token);

        let signer = OracleSigner::random(U256::from(CHAIN_ID), LEDGER_ADDRESS);
        let host = InProcessHost::new(RewardEngine::new(), signer);
        ledger
            .set_oracle(ADMIN, host.oracle_address())
            .expect("admin configures the oracle");

        Self { ledger, host }
    }

    /// Draws a fresh random salt
    pub fn salt(&self) -> B256 {
        random_salt(&mut thread_rng())
    }

    /// Submits a finished claim proof to the ledger
    pub fn submit_claim(&mut self, proof: &ClaimProof) -> Result<(), LedgerError> {
        self.ledger.claim_rewards(
            proof.claimant,
            proof.amount,
            proof.proof_hash,
            proof.nonce,
            &proof.signature,
        )
    }

    /// Submits the signed half of a task response to the ledger, exactly as
    /// the client orchestrator would
    pub fn submit_proof_data(
        &mut self,
        proof_hash: B256,
        proof: &ProofData,
    ) -> Result<(), LedgerError> {
        let amount = U256::from_str_radix(&proof.reward, 10)
            .expect("oracle rewards are decimal uint strings");
        self.ledger
            .claim_rewards(proof.claimant, amount, proof_hash, proof.nonce, &proof.signature)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
