//! Orchestration over compute hosts: prefer the remote confidential host,
//! fall back to the in-process engine when it cannot serve, and always say
//! which path produced the result.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    host::{ComputeHost, HostError, InProcessHost},
    tasks::{TaskRequest, TaskResponse},
};

/// Which execution path produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComputePath {
    /// The remote confidential host served the task
    Remote,
    /// No remote host is configured; the in-process engine is the only path
    Local,
    /// The remote host failed and the in-process engine served the task
    /// instead. Same formula and same rounding, flagged so the substitution
    /// is never silent.
    LocalFallback,
}

/// A task result together with the path that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleOutcome {
    /// The task result
    pub response: TaskResponse,
    /// The path that produced it
    pub via: ComputePath,
}

/// The oracle client the orchestrator talks to
#[derive(Debug)]
pub struct OracleClient<H: ComputeHost> {
    /// The preferred remote host, when one is configured
    remote: Option<H>,
    /// The always-available in-process path
    local: InProcessHost,
}

impl<H: ComputeHost> OracleClient<H> {
    /// Builds a client with an optional remote host and the local engine
    pub fn new(remote: Option<H>, local: InProcessHost) -> Self {
        Self { remote, local }
    }

    /// Executes a task, preferring the remote host.
    ///
    /// A remote failure (unreachable, misconfigured) is logged and served
    /// locally instead; the outcome's `via` field records the substitution.
    /// A task the host *rejected on its merits* still fails; only host
    /// availability errors trigger the fallback.
    pub async fn execute(&self, request: TaskRequest) -> Result<OracleOutcome, HostError> {
        if let Some(remote) = &self.remote {
            match remote.submit(request.clone()).await {
                Ok(response) => {
                    return Ok(OracleOutcome {
                        response,
                        via: ComputePath::Remote,
                    })
                }
                Err(err @ HostError::Rejected(_)) => return Err(err),
                Err(err) => {
                    warn!(target: "oracle", %err, "remote host failed; serving locally");
                    let response = self.local.submit(request).await?;
                    return Ok(OracleOutcome {
                        response,
                        via: ComputePath::LocalFallback,
                    });
                }
            }
        }

        let response = self.local.submit(request).await?;
        Ok(OracleOutcome {
            response,
            via: ComputePath::Local,
        })
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, Address, U256};

    use contracts_common::constants::SECONDS_PER_YEAR;

    use super::*;
    use crate::{engine::RewardEngine, signer::OracleSigner, tasks::StakeData};

    /// The test claimant
    const USER: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");

    /// A remote host double that always reports itself unreachable
    struct UnreachableHost;

    impl ComputeHost for UnreachableHost {
        async fn submit(&self, _request: TaskRequest) -> Result<TaskResponse, HostError> {
            Err(HostError::Unreachable("connection refused".into()))
        }
    }

    /// A remote host double that executes for real, in-process
    struct WorkingHost(InProcessHost);

    impl ComputeHost for WorkingHost {
        async fn submit(&self, request: TaskRequest) -> Result<TaskResponse, HostError> {
            self.0.submit(request).await
        }
    }

    /// Builds an in-process host over a throwaway deployment
    fn local_host() -> InProcessHost {
        InProcessHost::new(
            RewardEngine::new(),
            OracleSigner::random(
                U256::from(31337u64),
                address!("00000000000000000000000000000000001ed6e0"),
            ),
        )
    }

    /// A number-only reward request (no nonce, so responses are
    /// deterministic and comparable across paths)
    fn request() -> TaskRequest {
        TaskRequest::ComputeRewards {
            stake_data: StakeData {
                amount: "1000000".into(),
                stake_timestamp: 0,
                user_address: USER,
            },
            current_timestamp: SECONDS_PER_YEAR,
            base_apy: 520,
            nonce: None,
        }
    }

    #[tokio::test]
    async fn test_no_remote_serves_locally() {
        let client: OracleClient<UnreachableHost> = OracleClient::new(None, local_host());
        let outcome = client.execute(request()).await.unwrap();
        assert_eq!(outcome.via, ComputePath::Local);
    }

    #[tokio::test]
    async fn test_unreachable_remote_falls_back_flagged() {
        let client = OracleClient::new(Some(UnreachableHost), local_host());
        let outcome = client.execute(request()).await.unwrap();

        assert_eq!(outcome.via, ComputePath::LocalFallback);
        let TaskResponse::ComputeRewards { outcome } = outcome.response else {
            panic!("wrong response variant");
        };
        assert_eq!(outcome.rewards, "52000");
    }

    #[tokio::test]
    async fn test_remote_and_local_agree() {
        let remote_client = OracleClient::new(Some(WorkingHost(local_host())), local_host());
        let local_client: OracleClient<UnreachableHost> = OracleClient::new(None, local_host());

        let remote = remote_client.execute(request()).await.unwrap();
        let local = local_client.execute(request()).await.unwrap();

        assert_eq!(remote.via, ComputePath::Remote);
        // Identical formula, identical rounding: the responses match exactly
        assert_eq!(remote.response, local.response);
    }

    #[tokio::test]
    async fn test_rejected_task_does_not_fall_back() {
        let client = OracleClient::new(Some(WorkingHost(local_host())), local_host());
        let bad_request = TaskRequest::ComputeRewards {
            stake_data: StakeData {
                amount: "???".into(),
                stake_timestamp: 0,
                user_address: USER,
            },
            current_timestamp: SECONDS_PER_YEAR,
            base_apy: 520,
            nonce: None,
        };

        let err = client.execute(bad_request).await.unwrap_err();
        assert!(matches!(err, HostError::Rejected(_)));
    }
}
