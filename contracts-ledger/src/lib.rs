//! The staking ledger: asset custody, the commitment store hiding stake
//! amounts, the receipt/reward token books, and the oracle-signature-gated
//! claim verifier.
//!
//! The ledger is an in-process state machine. Each public operation is one
//! atomic, synchronous state transition; cross-call ordering is imposed by
//! whoever drives the ledger (the execution environment's transaction log in
//! the original deployment), so no internal locking exists beyond the
//! reentrancy guard.

pub mod components;
pub mod custody;
pub mod error;
pub mod ledger;
pub mod store;
pub mod token;

pub use custody::{AssetCustody, CustodyError};
pub use error::LedgerError;
pub use ledger::StakingLedger;
