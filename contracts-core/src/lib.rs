//! Core staking protocol logic, defined agnostically of where it runs: the
//! same functions back the ledger's claim verification and the oracle's
//! confidential computations

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod aggregate;
pub mod commitments;
pub mod crypto;
pub mod rewards;
