//! The asset custody port: the ledger's seat at a standard fungible-token
//! contract.
//!
//! `pull` corresponds to `transferFrom(owner, ledger, amount)` (and therefore
//! requires the owner's prior approval), `release` to
//! `transfer(owner, amount)` out of the ledger's own balance. Failures from
//! the token contract (insufficient balance, insufficient allowance) are
//! the token's to report and propagate through the ledger unchanged.

use alloy_primitives::{Address, U256};

/// An error reported by the asset custody contract, propagated as-is
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustodyError {
    /// The source account's balance cannot cover the transfer
    #[error("insufficient asset balance: have {balance}, need {needed}")]
    InsufficientBalance {
        /// The balance actually held
        balance: U256,
        /// The amount the transfer required
        needed: U256,
    },

    /// The ledger's allowance from the owner cannot cover the pull
    #[error("insufficient allowance: approved {approved}, need {needed}")]
    InsufficientAllowance {
        /// The approved allowance
        approved: U256,
        /// The amount the pull required
        needed: U256,
    },

    /// The token contract rejected the transfer for its own reasons
    #[error("asset transfer rejected: {0}")]
    Rejected(String),
}

/// The ledger's interface to the underlying asset contract
pub trait AssetCustody {
    /// Pulls `amount` of the asset from `owner` into the ledger's custody
    fn pull(&mut self, owner: Address, amount: U256) -> Result<(), CustodyError>;

    /// Releases `amount` of the asset from the ledger's custody back to `owner`
    fn release(&mut self, owner: Address, amount: U256) -> Result<(), CustodyError>;

    /// The asset balance held by `account`
    fn balance_of(&self, account: Address) -> U256;
}
