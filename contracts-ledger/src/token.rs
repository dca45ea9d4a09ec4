//! Minimal fungible token books for the receipt and reward tokens.
//!
//! Balances and the total supply are public plaintext. Because the receipt
//! token is minted 1:1 against staked amounts and is freely transferable,
//! its balances and transfer amounts leak exactly what the commitments hide.
//! This confidentiality gap is inherited from the source design and is
//! reproduced here deliberately rather than silently fixed (see DESIGN.md).

use std::collections::HashMap;

use alloy_primitives::{Address, U256};

use crate::error::LedgerError;

/// A fungible token book: per-account balances plus the total supply
#[derive(Debug, Default)]
pub struct TokenBook {
    /// Per-account balances
    balances: HashMap<Address, U256>,
    /// The total minted supply
    total_supply: U256,
}

impl TokenBook {
    /// Creates an empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints `amount` to `account`.
    ///
    /// Supply overflow is an invariant breach, not an error path: every mint
    /// is bounded by custody actually pulled (receipt token) or by an
    /// oracle-signed amount (reward token), so the checked arithmetic here
    /// mirrors the original's revert-on-overflow semantics.
    pub fn mint(&mut self, account: Address, amount: U256) {
        self.total_supply = self
            .total_supply
            .checked_add(amount)
            .expect("token supply overflow");
        let balance = self.balances.entry(account).or_default();
        *balance = balance.checked_add(amount).expect("token balance overflow");
    }

    /// Burns `amount` from `account`, failing with
    /// [`LedgerError::InsufficientBalance`] if the balance cannot cover it
    pub fn burn(&mut self, account: Address, amount: U256) -> Result<(), LedgerError> {
        let balance = self.balances.entry(account).or_default();
        if *balance < amount {
            return Err(LedgerError::InsufficientBalance {
                balance: *balance,
                needed: amount,
            });
        }

        *balance -= amount;
        self.total_supply -= amount;
        Ok(())
    }

    /// Moves `amount` from `from` to `to`, failing with
    /// [`LedgerError::InsufficientBalance`] if `from` cannot cover it
    pub fn transfer(&mut self, from: Address, to: Address, amount: U256) -> Result<(), LedgerError> {
        let balance = self.balances.entry(from).or_default();
        if *balance < amount {
            return Err(LedgerError::InsufficientBalance {
                balance: *balance,
                needed: amount,
            });
        }

        *balance -= amount;
        let to_balance = self.balances.entry(to).or_default();
        *to_balance = to_balance.checked_add(amount).expect("token balance overflow");
        Ok(())
    }

    /// The balance held by `account`
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or(U256::ZERO)
    }

    /// The total minted supply
    pub fn total_supply(&self) -> U256 {
        self.total_supply
    }
}
