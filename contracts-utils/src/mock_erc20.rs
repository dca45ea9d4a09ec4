//! A mock ERC20 token implementation used in testing and the demo binary.
//!
//! THIS IS NOT MEANT TO STAND IN FOR A PRODUCTION TOKEN CONTRACT.
//!
//! It reproduces the transfer/approve semantics the ledger's custody port
//! assumes: `pull` spends the owner's allowance toward the ledger like
//! `transferFrom`, `release` moves out of the ledger's own balance like
//! `transfer`, and both fail the way a real token would.

use std::collections::HashMap;

use alloy_primitives::{Address, U256};

use contracts_ledger::custody::{AssetCustody, CustodyError};

/// An in-memory ERC20-shaped asset
#[derive(Debug)]
pub struct MockErc20 {
    /// The address transfers are custodied under (the ledger's address)
    ledger: Address,
    /// Per-account balances
    balances: HashMap<Address, U256>,
    /// Allowances granted to the ledger, per owner
    allowances: HashMap<Address, U256>,
}

impl MockErc20 {
    /// Creates the token with the ledger's custody address
    pub fn new(ledger: Address) -> Self {
        Self {
            ledger,
            balances: HashMap::new(),
            allowances: HashMap::new(),
        }
    }

    /// Mints `amount` to `account`, as a faucet would
    pub fn fund(&mut self, account: Address, amount: U256) {
        let balance = self.balances.entry(account).or_default();
        *balance = balance.checked_add(amount).expect("mock supply overflow");
    }

    /// Approves the ledger to pull up to `amount` from `owner`
    pub fn approve(&mut self, owner: Address, amount: U256) {
        self.allowances.insert(owner, amount);
    }

    /// The allowance `owner` has granted the ledger
    pub fn allowance(&self, owner: Address) -> U256 {
        self.allowances.get(&owner).copied().unwrap_or(U256::ZERO)
    }
}

impl AssetCustody for MockErc20 {
    fn pull(&mut self, owner: Address, amount: U256) -> Result<(), CustodyError> {
        let approved = self.allowance(owner);
        if approved < amount {
            return Err(CustodyError::InsufficientAllowance {
                approved,
                needed: amount,
            });
        }

        let balance = self.balances.entry(owner).or_default();
        if *balance < amount {
            return Err(CustodyError::InsufficientBalance {
                balance: *balance,
                needed: amount,
            });
        }

        *balance -= amount;
        self.allowances.insert(owner, approved - amount);
        *self.balances.entry(self.ledger).or_default() += amount;
        Ok(())
    }

    fn release(&mut self, owner: Address, amount: U256) -> Result<(), CustodyError> {
        let balance = self.balances.entry(self.ledger).or_default();
        if *balance < amount {
            return Err(CustodyError::InsufficientBalance {
                balance: *balance,
                needed: amount,
            });
        }

        *balance -= amount;
        *self.balances.entry(owner).or_default() += amount;
        Ok(())
    }

    fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or(U256::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    /// The custody address
    const LEDGER: Address = address!("00000000000000000000000000000000001ed6e0");
    /// A token holder
    const ALICE: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");

    #[test]
    fn test_pull_requires_allowance() {
        let mut token = MockErc20::new(LEDGER);
        token.fund(ALICE, U256::from(100u64));

        let err = token.pull(ALICE, U256::from(50u64)).unwrap_err();
        assert!(matches!(err, CustodyError::InsufficientAllowance { .. }));

        token.approve(ALICE, U256::from(50u64));
        token.pull(ALICE, U256::from(50u64)).unwrap();
        assert_eq!(token.balance_of(LEDGER), U256::from(50u64));
        assert_eq!(token.allowance(ALICE), U256::ZERO);
    }

    #[test]
    fn test_pull_requires_balance() {
        let mut token = MockErc20::new(LEDGER);
        token.approve(ALICE, U256::from(50u64));

        let err = token.pull(ALICE, U256::from(50u64)).unwrap_err();
        assert!(matches!(err, CustodyError::InsufficientBalance { .. }));
    }

    #[test]
    fn test_release_roundtrip() {
        let mut token = MockErc20::new(LEDGER);
        token.fund(ALICE, U256::from(100u64));
        token.approve(ALICE, U256::from(100u64));

        token.pull(ALICE, U256::from(100u64)).unwrap();
        token.release(ALICE, U256::from(100u64)).unwrap();
        assert_eq!(token.balance_of(ALICE), U256::from(100u64));
        assert_eq!(token.balance_of(LEDGER), U256::ZERO);
    }
}
