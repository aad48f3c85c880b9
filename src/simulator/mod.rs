//! Dice simulator for Monte Carlo analysis.
//!
//! Builds dice from a [`SimConfig`], plays one game and runs every
//! analysis over it:
//! - jackpot count and rate
//! - face counts per roll and overall face frequency
//! - combination and permutation tallies

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{build_dice, create_rng, run_simulation};
