//! The commitment store: a set of opaque commitment identifiers standing in
//! for plaintext stake amounts, plus the per-owner lists of live commitments.
//!
//! Existence of an identifier is a boolean fact; the store never sees an
//! amount or a salt. The per-owner lists reveal how many positions an owner
//! holds, not what they are worth.

use std::collections::{HashMap, HashSet};

use alloy_primitives::{Address, B256};

use crate::error::LedgerError;

/// The commitment store embedded in the staking ledger
#[derive(Debug, Default)]
pub struct CommitmentStore {
    /// Present-flags for every live commitment
    present: HashSet<B256>,
    /// Per-owner lists of live commitment identifiers
    active: HashMap<Address, Vec<B256>>,
}

impl CommitmentStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `id` present. Fails with [`LedgerError::DuplicateCommitment`] if
    /// it is already present; no side effect beyond the flag.
    pub fn record(&mut self, id: B256) -> Result<(), LedgerError> {
        if !self.present.insert(id) {
            return Err(LedgerError::DuplicateCommitment(id));
        }
        Ok(())
    }

    /// Removes the present-flag for `id` without touching any owner list.
    ///
    /// Used to unwind a `record` when a later step of the same state
    /// transition fails (the EVM original gets this for free from revert
    /// semantics).
    pub fn unrecord(&mut self, id: B256) {
        self.present.remove(&id);
    }

    /// Appends `id` to `owner`'s active list
    pub fn append(&mut self, owner: Address, id: B256) {
        self.active.entry(owner).or_default().push(id);
    }

    /// Clears the present-flag for `id` and removes it from `owner`'s active
    /// list. Fails with [`LedgerError::CommitmentNotFound`] if the flag is
    /// not set.
    ///
    /// Removal from the list is swap-and-pop: O(1), and the order of the
    /// remaining entries is not preserved. Order carries no meaning here.
    pub fn clear(&mut self, owner: Address, id: B256) -> Result<(), LedgerError> {
        if !self.present.remove(&id) {
            return Err(LedgerError::CommitmentNotFound(id));
        }

        if let Some(list) = self.active.get_mut(&owner) {
            if let Some(idx) = list.iter().position(|entry| *entry == id) {
                list.swap_remove(idx);
            }
        }

        Ok(())
    }

    /// Whether `id` is currently present. Pure read, always succeeds.
    pub fn exists(&self, id: B256) -> bool {
        self.present.contains(&id)
    }

    /// The live commitment identifiers for `owner`, in unspecified order
    pub fn active(&self, owner: Address) -> &[B256] {
        self.active.get(&owner).map(Vec::as_slice).unwrap_or_default()
    }
}
