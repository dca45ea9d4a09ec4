//! Error type for the operational scripts

use contracts_ledger::LedgerError;
use reward_oracle::HostError;

/// Error type for the operational scripts
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// A ledger operation failed
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// An oracle task failed
    #[error("oracle error: {0}")]
    Oracle(#[from] HostError),

    /// A task result could not be rendered
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
