//! Common modules shared between the staking ledger and the reward oracle,
//! including the hash constructions both sides must agree on bit-for-bit

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod constants;
pub mod hashing;
pub mod types;
