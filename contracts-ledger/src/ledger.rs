//! The staking ledger, responsible for maintaining the set of live stake
//! commitments, custodying the underlying asset, minting and burning the
//! receipt token, and honoring oracle-signed reward claims.

use std::collections::{HashMap, HashSet};

use alloy_primitives::{Address, B256, U256};
use tracing::info;

use contracts_common::{
    hashing::{claim_signing_hash, compute_commitment},
    types::LedgerConfig,
};
use contracts_core::crypto::ecdsa::recover_signer;

use crate::{
    components::{guard::ReentrancyGuard, ownable::Ownable},
    custody::AssetCustody,
    error::LedgerError,
    store::CommitmentStore,
    token::TokenBook,
};

/// The staking ledger state machine
#[derive(Debug)]
pub struct StakingLedger<A: AssetCustody> {
    /// Deployment parameters; chain id and ledger address bind claim
    /// signatures to this instance
    config: LedgerConfig,
    /// Administrative access control
    ownable: Ownable,
    /// Fail-fast guard over the mutating operations
    guard: ReentrancyGuard,
    /// The custodied asset contract
    asset: A,
    /// The commitment store
    store: CommitmentStore,
    /// The liquid-staking receipt token, minted 1:1 against stakes
    receipt: TokenBook,
    /// The reward token, minted against verified claims
    reward: TokenBook,
    /// Total value locked, public plaintext
    total_locked: U256,
    /// The configured oracle signer; the zero address means unconfigured and
    /// hard-fails every claim
    oracle: Address,
    /// Proof hashes already honored once
    claimed: HashSet<B256>,
    /// Per-claimant replay-protection nonces, strictly sequential
    nonces: HashMap<Address, U256>,
}

impl<A: AssetCustody> StakingLedger<A> {
    /// Creates a ledger over the given asset contract. The oracle starts
    /// unconfigured; claims fail until the administrator sets it.
    pub fn new(config: LedgerConfig, asset: A) -> Self {
        Self {
            ownable: Ownable::new(config.admin),
            config,
            guard: ReentrancyGuard::default(),
            asset,
            store: CommitmentStore::new(),
            receipt: TokenBook::new(),
            reward: TokenBook::new(),
            total_locked: U256::ZERO,
            oracle: Address::ZERO,
            claimed: HashSet::new(),
            nonces: HashMap::new(),
        }
    }

    // -----------
    // | STAKING |
    // -----------

    /// Stakes `amount` of the asset under a fresh commitment.
    ///
    /// Computes `commitment = keccak256(amount ‖ salt ‖ caller)`, records it,
    /// pulls custody, and mints the receipt token 1:1. The salt is
    /// caller-supplied entropy; its quality is not validated here, so a
    /// caller reusing a salt for the same amount is caught only by the
    /// duplicate-commitment check. Returns the commitment identifier.
    pub fn stake(
        &mut self,
        caller: Address,
        amount: U256,
        salt: B256,
    ) -> Result<B256, LedgerError> {
        self.guard.enter()?;
        let result = self.stake_inner(caller, amount, salt);
        self.guard.exit();
        result
    }

    /// Unstakes the position opened by `(amount, salt)`.
    ///
    /// The recomputed commitment's membership in the store is the sole
    /// authorization check, and deliberately so: the caller's address is part
    /// of the commitment pre-image, so a non-owner recomputes a hash that was
    /// never recorded and fails the lookup naturally. Do not "harden" this
    /// with an explicit access list: the hash is the access control.
    pub fn unstake(
        &mut self,
        caller: Address,
        amount: U256,
        salt: B256,
    ) -> Result<(), LedgerError> {
        self.guard.enter()?;
        let result = self.unstake_inner(caller, amount, salt);
        self.guard.exit();
        result
    }

    /// The guarded body of [`Self::stake`]
    fn stake_inner(
        &mut self,
        caller: Address,
        amount: U256,
        salt: B256,
    ) -> Result<B256, LedgerError> {
        if amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }

        let commitment = compute_commitment(amount, salt, caller);
        self.store.record(commitment)?;

        // Custody is the one external boundary; a failed pull must leave no
        // trace of the commitment
        if let Err(err) = self.asset.pull(caller, amount) {
            self.store.unrecord(commitment);
            return Err(err.into());
        }

        self.store.append(caller, commitment);
        self.receipt.mint(caller, amount);
        // Receipt supply and total-locked move in lockstep; the mint above
        // has already checked the bound
        self.total_locked += amount;

        info!(target: "ledger", %caller, %commitment, amount_minted = %amount, "stake recorded");
        Ok(commitment)
    }

    /// The guarded body of [`Self::unstake`]
    fn unstake_inner(
        &mut self,
        caller: Address,
        amount: U256,
        salt: B256,
    ) -> Result<(), LedgerError> {
        let commitment = compute_commitment(amount, salt, caller);
        self.store.clear(caller, commitment)?;

        // The caller may have transferred receipts away; restore the
        // commitment if the burn cannot cover the position
        if let Err(err) = self.receipt.burn(caller, amount) {
            self.store.record(commitment)?;
            self.store.append(caller, commitment);
            return Err(err);
        }

        self.total_locked -= amount;
        self.asset.release(caller, amount)?;

        info!(target: "ledger", %caller, %commitment, amount_released = %amount, "stake released");
        Ok(())
    }

    // ----------
    // | CLAIMS |
    // ----------

    /// Honors an oracle-signed reward claim, minting `amount` of the reward
    /// token to `claimant`.
    ///
    /// The signature must recover to the configured oracle over the
    /// deployment-bound claim digest, `nonce` must be exactly the claimant's
    /// next expected nonce, and `proof_hash` must never have been honored
    /// before. A claim that fails is never retried here; the caller must
    /// obtain a fresh proof from the oracle.
    pub fn claim_rewards(
        &mut self,
        claimant: Address,
        amount: U256,
        proof_hash: B256,
        nonce: U256,
        signature: &[u8],
    ) -> Result<(), LedgerError> {
        self.guard.enter()?;
        let result = self.claim_inner(claimant, amount, proof_hash, nonce, signature);
        self.guard.exit();
        result
    }

    /// The guarded body of [`Self::claim_rewards`]
    fn claim_inner(
        &mut self,
        claimant: Address,
        amount: U256,
        proof_hash: B256,
        nonce: U256,
        signature: &[u8],
    ) -> Result<(), LedgerError> {
        if self.oracle == Address::ZERO {
            return Err(LedgerError::OracleUnset);
        }

        if self.claimed.contains(&proof_hash) {
            return Err(LedgerError::AlreadyClaimed(proof_hash));
        }

        let signing_hash = claim_signing_hash(
            claimant,
            amount,
            proof_hash,
            nonce,
            self.config.chain_id,
            self.config.address,
        );
        let signer =
            recover_signer(signing_hash, signature).map_err(|_| LedgerError::InvalidSignature)?;

        // A wrong signer and a stale nonce are the same failure: the
        // signature does not authorize this exact claim state
        let expected_nonce = self.nonce_of(claimant);
        if signer != self.oracle || nonce != expected_nonce {
            return Err(LedgerError::InvalidSignature);
        }

        self.claimed.insert(proof_hash);
        self.nonces.insert(claimant, expected_nonce + U256::from(1));
        self.reward.mint(claimant, amount);

        info!(target: "ledger", %claimant, %proof_hash, reward_minted = %amount, "claim honored");
        Ok(())
    }

    // ------------------
    // | ADMINISTRATION |
    // ------------------

    /// Configures the oracle signer address. Owner-only; setting the zero
    /// address returns the ledger to its unconfigured state.
    pub fn set_oracle(&mut self, caller: Address, oracle: Address) -> Result<(), LedgerError> {
        self.ownable.ensure_owner(caller)?;
        let previous = self.oracle;
        self.oracle = oracle;
        info!(target: "ledger", %previous, %oracle, "oracle rotated");
        Ok(())
    }

    /// Transfers ledger ownership. Owner-only; the zero address is rejected.
    pub fn transfer_ownership(
        &mut self,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), LedgerError> {
        self.ownable.transfer_ownership(caller, new_owner)
    }

    // -----------
    // | GETTERS |
    // -----------

    /// The deployment parameters
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// The current owner
    pub fn owner(&self) -> Address {
        self.ownable.owner()
    }

    /// The configured oracle, or the zero address if unconfigured
    pub fn oracle(&self) -> Address {
        self.oracle
    }

    /// Total value locked
    pub fn total_locked(&self) -> U256 {
        self.total_locked
    }

    /// Whether `commitment` is live
    pub fn is_committed(&self, commitment: B256) -> bool {
        self.store.exists(commitment)
    }

    /// The caller's live commitments, in unspecified order
    pub fn active_commitments(&self, owner: Address) -> &[B256] {
        self.store.active(owner)
    }

    /// The claimant's next expected claim nonce
    pub fn nonce_of(&self, claimant: Address) -> U256 {
        self.nonces.get(&claimant).copied().unwrap_or(U256::ZERO)
    }

    /// The receipt-token balance of `account`
    pub fn receipt_balance(&self, account: Address) -> U256 {
        self.receipt.balance_of(account)
    }

    /// The reward-token balance of `account`
    pub fn reward_balance(&self, account: Address) -> U256 {
        self.reward.balance_of(account)
    }

    /// The asset balance custodied by the ledger, as reported by the asset
    /// contract
    pub fn custodied_balance(&self) -> U256 {
        self.asset.balance_of(self.config.address)
    }

    // -------------------
    // | RECEIPT TRANSFER |
    // -------------------

    /// Transfers receipt tokens between accounts.
    ///
    /// Note that receipt balances are public and 1:1 with staked amounts, so
    /// every transfer reveals exactly what the sender's commitment hides.
    /// This is the source design's confidentiality gap, kept as-is.
    pub fn transfer_receipt(
        &mut self,
        caller: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        self.receipt.transfer(caller, to, amount)
    }
}
