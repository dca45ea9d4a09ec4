//! Operational scripts for the shielded staking protocol: an in-process demo
//! of the full stake → compute → claim → unstake flow, oracle key
//! generation, and one-shot reward computation

pub mod cli;
pub mod commands;
pub mod errors;
