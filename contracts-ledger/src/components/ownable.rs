//! Mirrors OpenZeppelin's `Ownable` contract for access controls:
//! https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/access/Ownable.sol
//!
//! Adapted to an in-process ledger: the caller is an explicit argument rather
//! than an ambient `msg.sender`, and violations are errors rather than
//! reverts.

use alloy_primitives::Address;
use tracing::info;

use crate::error::LedgerError;

/// Single-owner access control for administrative operations
#[derive(Debug)]
pub struct Ownable {
    /// The current owner
    owner: Address,
}

impl Ownable {
    /// Creates the component with its initial owner
    pub fn new(owner: Address) -> Self {
        Self { owner }
    }

    /// The current owner
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Fails with [`LedgerError::NotOwner`] unless `caller` is the owner
    pub fn ensure_owner(&self, caller: Address) -> Result<(), LedgerError> {
        if caller != self.owner {
            return Err(LedgerError::NotOwner(caller));
        }
        Ok(())
    }

    /// Transfers ownership to `new_owner`. Only the current owner may call
    /// this, and the zero address is not a valid owner.
    pub fn transfer_ownership(
        &mut self,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), LedgerError> {
        self.ensure_owner(caller)?;
        if new_owner == Address::ZERO {
            return Err(LedgerError::InvalidOwner);
        }

        let previous_owner = self.owner;
        self.owner = new_owner;
        info!(target: "ledger", %previous_owner, %new_owner, "ownership transferred");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    #[test]
    fn test_owner_gate() {
        let admin = address!("0101010101010101010101010101010101010101");
        let stranger = address!("0202020202020202020202020202020202020202");
        let ownable = Ownable::new(admin);

        assert!(ownable.ensure_owner(admin).is_ok());
        assert!(matches!(
            ownable.ensure_owner(stranger),
            Err(LedgerError::NotOwner(caller)) if caller == stranger,
        ));
    }

    #[test]
    fn test_transfer_ownership() {
        let admin = address!("0101010101010101010101010101010101010101");
        let next = address!("0202020202020202020202020202020202020202");
        let mut ownable = Ownable::new(admin);

        // A non-owner cannot hand ownership around
        assert!(ownable.transfer_ownership(next, next).is_err());

        ownable.transfer_ownership(admin, next).unwrap();
        assert_eq!(ownable.owner(), next);
        assert!(ownable.ensure_owner(admin).is_err());
    }

    #[test]
    fn test_zero_owner_rejected() {
        let admin = address!("0101010101010101010101010101010101010101");
        let mut ownable = Ownable::new(admin);

        assert!(matches!(
            ownable.transfer_ownership(admin, Address::ZERO),
            Err(LedgerError::InvalidOwner),
        ));
    }
}
