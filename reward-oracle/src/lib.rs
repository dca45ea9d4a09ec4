//! The confidential reward oracle: computes rewards over plaintext stake data
//! the public ledger never sees, and signs nonce-bound claim proofs the
//! ledger's verifier will honor.
//!
//! The computations themselves are stateless, side-effect-free functions
//! (signing aside), so they parallelize freely. Execution normally happens on
//! a remote confidential-compute host; the [`client::OracleClient`] falls
//! back to the in-process engine (with numerically identical results) when
//! the remote host is unreachable, and flags the fallback in its result
//! rather than substituting it silently.

pub mod client;
pub mod engine;
pub mod host;
pub mod signer;
pub mod tasks;

pub use client::{ComputePath, OracleClient, OracleOutcome};
pub use engine::RewardEngine;
pub use host::{ComputeHost, HostError, InProcessHost};
pub use signer::OracleSigner;
pub use tasks::{TaskRequest, TaskResponse};
