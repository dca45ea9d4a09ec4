//! Definitions of CLI arguments and commands for the operational scripts

use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{compute_reward, demo, keygen},
    errors::ScriptError,
};

/// The shielded staking protocol's operational CLI
#[derive(Parser)]
#[command(about = "Shielded staking demo & oracle tooling")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full in-process flow: stake under a commitment, compute the
    /// reward confidentially, claim it, and unstake
    Demo(DemoArgs),
    /// Generate a fresh oracle keypair
    Keygen,
    /// Run the reward formula once and print the oracle's JSON response
    ComputeReward(ComputeRewardArgs),
}

impl Command {
    pub async fn run(self) -> Result<(), ScriptError> {
        match self {
            Command::Demo(args) => demo(args).await,
            Command::Keygen => keygen(),
            Command::ComputeReward(args) => compute_reward(args).await,
        }
    }
}

/// Arguments for the in-process demo flow
#[derive(Args)]
pub struct DemoArgs {
    /// The amount to stake
    #[arg(long, default_value_t = 1_000_000)]
    pub amount: u64,

    /// The APY in basis points
    #[arg(long, default_value_t = 520)]
    pub apy_bps: u64,

    /// How long the stake is held before the reward computation, in seconds
    #[arg(long, default_value_t = 31_536_000)]
    pub duration_secs: u64,
}

/// Arguments for a one-shot reward computation
#[derive(Args)]
pub struct ComputeRewardArgs {
    /// The staked amount, as a decimal string
    #[arg(long)]
    pub amount: String,

    /// When the stake was made (unix seconds)
    #[arg(long)]
    pub stake_timestamp: u64,

    /// The computation's notion of "now" (unix seconds)
    #[arg(long)]
    pub current_timestamp: u64,

    /// The APY in basis points
    #[arg(long, default_value_t = 520)]
    pub apy_bps: u64,
}
