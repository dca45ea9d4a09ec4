//! Port for the confidential-compute host that executes oracle tasks.
//!
//! Implementations:
//! - [`InProcessHost`] runs the engine and signer in-process; it doubles as
//!   the local fallback path and the reference the remote path must agree with
//! - a real enclave-backed host (production) is external infrastructure whose
//!   transport and attestation are out of scope here

use std::future::Future;

use tracing::debug;

use crate::{
    engine::RewardEngine,
    signer::{OracleSigner, SignerError},
    tasks::{ProofData, RewardOutcome, TaskRequest, TaskResponse},
};
use alloy_primitives::{Address, B256};

/// An error from the confidential-compute host
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The host could not be reached
    #[error("confidential host unreachable: {0}")]
    Unreachable(String),

    /// The host is reachable but misconfigured for this task
    #[error("confidential host misconfigured: {0}")]
    Misconfigured(String),

    /// The host rejected the task input
    #[error("task rejected: {0}")]
    Rejected(String),
}

/// Port for submitting a task and awaiting its result
pub trait ComputeHost: Send + Sync {
    /// Executes one task to completion
    fn submit(
        &self,
        request: TaskRequest,
    ) -> impl Future<Output = Result<TaskResponse, HostError>> + Send;
}

/// The in-process host: engine plus signer, no transport.
///
/// This is the fallback path of [`crate::client::OracleClient`] and must stay
/// numerically identical to what a remote host computes. Both delegate to
/// the same `contracts-core` arithmetic, so equality is structural.
#[derive(Debug)]
pub struct InProcessHost {
    /// The computation engine
    engine: RewardEngine,
    /// The claim signer
    signer: OracleSigner,
}

impl InProcessHost {
    /// Builds the host from its engine and signer
    pub fn new(engine: RewardEngine, signer: OracleSigner) -> Self {
        Self { engine, signer }
    }

    /// The oracle address claims issued here recover to
    pub fn oracle_address(&self) -> Address {
        self.signer.address()
    }

    /// Synchronous task execution; the async port wraps this
    pub fn execute(&self, request: &TaskRequest) -> Result<TaskResponse, HostError> {
        match request {
            TaskRequest::ComputeRewards {
                stake_data,
                current_timestamp,
                base_apy,
                nonce,
            } => {
                let reward = self
                    .engine
                    .compute(stake_data, *current_timestamp, *base_apy)
                    .map_err(|err| HostError::Rejected(err.to_string()))?;
                debug!(target: "oracle", user = %stake_data.user_address, rewards = %reward, "reward computed");

                // A claim is issuable only for a positive reward with a nonce
                // to bind it to; otherwise the number alone is returned
                let proof = match nonce {
                    Some(nonce) => {
                        match self.signer.issue_claim(
                            stake_data.user_address,
                            &reward,
                            *current_timestamp,
                            *nonce,
                        ) {
                            Ok(claim) => Some(claim),
                            Err(SignerError::NonPositiveReward(_)) => None,
                            Err(err) => return Err(HostError::Rejected(err.to_string())),
                        }
                    }
                    None => None,
                };

                let outcome = match proof {
                    Some(claim) => RewardOutcome {
                        rewards: reward.to_string(),
                        proof_hash: claim.proof_hash,
                        proof_data: Some(ProofData {
                            claimant: claim.claimant,
                            reward: claim.amount.to_string(),
                            timestamp: *current_timestamp,
                            nonce: claim.nonce,
                            signature: claim.signature,
                        }),
                    },
                    None => RewardOutcome {
                        rewards: reward.to_string(),
                        proof_hash: B256::ZERO,
                        proof_data: None,
                    },
                };
                Ok(TaskResponse::ComputeRewards { outcome })
            }

            TaskRequest::ComputeBulkRewards {
                stake_data,
                current_timestamp,
                base_apy,
            } => {
                let (results, summary) =
                    self.engine
                        .compute_bulk(stake_data, *current_timestamp, *base_apy);
                Ok(TaskResponse::ComputeBulkRewards { results, summary })
            }

            TaskRequest::VerifyCommitment {
                commitment,
                amount,
                salt,
                owner,
            } => {
                let valid = self
                    .engine
                    .verify(*commitment, amount, *salt, *owner)
                    .map_err(|err| HostError::Rejected(err.to_string()))?;
                Ok(TaskResponse::VerifyCommitment { valid })
            }

            TaskRequest::ComputeAggregateProof { entries } => {
                let proof = self
                    .engine
                    .aggregate(entries)
                    .map_err(|err| HostError::Rejected(err.to_string()))?;
                Ok(TaskResponse::ComputeAggregateProof {
                    total_amount: proof.total_amount.to_string(),
                    commitments_hash: proof.commitments_hash,
                    count: proof.count,
                })
            }
        }
    }
}

impl ComputeHost for InProcessHost {
    async fn submit(&self, request: TaskRequest) -> Result<TaskResponse, HostError> {
        self.execute(&request)
    }
}
