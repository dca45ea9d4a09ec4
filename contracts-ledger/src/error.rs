//! Error type for staking ledger operations.
//!
//! The taxonomy follows the protocol's failure classes: user-input errors and
//! state conflicts are rejected synchronously before (or without) any state
//! change, authorization failures are never downgraded, and external custody
//! failures propagate unchanged. Nothing here is retried by the ledger
//! itself; retry policy belongs to the caller.

use alloy_primitives::{Address, B256, U256};

use crate::custody::CustodyError;

/// Error type for staking ledger operations
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// A stake of zero was requested
    #[error("stake amount must be nonzero")]
    ZeroAmount,

    /// The commitment is already recorded; the same `(amount, salt)` pair was
    /// staked before by this caller
    #[error("commitment {0} already recorded")]
    DuplicateCommitment(B256),

    /// No live commitment matches the recomputed hash. Either the opening is
    /// wrong or the caller is not the owner the commitment was bound to;
    /// the two are indistinguishable by construction.
    #[error("commitment {0} not found")]
    CommitmentNotFound(B256),

    /// The token balance cannot cover the requested burn or transfer
    #[error("insufficient balance: have {balance}, need {needed}")]
    InsufficientBalance {
        /// The balance actually held
        balance: U256,
        /// The amount the operation required
        needed: U256,
    },

    /// The claim's proof hash was already honored once
    #[error("proof {0} already claimed")]
    AlreadyClaimed(B256),

    /// The claim signature does not recover to the configured oracle, or the
    /// claim nonce is not the claimant's current expected nonce
    #[error("claim signature invalid or nonce out of sequence")]
    InvalidSignature,

    /// No oracle address has been configured; every claim fails until the
    /// administrator sets one
    #[error("reward oracle is not configured")]
    OracleUnset,

    /// An owner-only operation was attempted by another caller
    #[error("caller {0} is not the ledger owner")]
    NotOwner(Address),

    /// Ownership cannot be transferred to the zero address
    #[error("new owner must not be the zero address")]
    InvalidOwner,

    /// A mutating operation was entered while another is in progress
    #[error("reentrant call rejected")]
    ReentrantCall,

    /// The asset custody contract rejected a transfer; propagated unchanged
    #[error(transparent)]
    Custody(#[from] CustodyError),
}
