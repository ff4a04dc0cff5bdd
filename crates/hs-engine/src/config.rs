//! Configuration for a simulation run.

use serde::{Deserialize, Serialize};

/// Settings for a simulation run. Every field has a documented default
/// so a partial (or absent) config source still yields a full config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// How many independent fights to run (default 1000).
    pub number_of_fights: u64,
    /// Round cap per fight before the fight is called a draw
    /// (default 20).
    pub max_rounds_per_fight: u32,
    /// Whether to replay each fight's event log (default false).
    pub verbose_output: bool,
    /// Whether to render the full per-character breakdown
    /// (default true).
    pub show_detailed_results: bool,
    /// Master RNG seed; trial `i` derives its own source from
    /// `seed + i` (default 42).
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            number_of_fights: 1000,
            max_rounds_per_fight: 20,
            verbose_output: false,
            show_detailed_results: true,
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Set the number of fights.
    pub fn with_fights(mut self, fights: u64) -> Self {
        self.number_of_fights = fights;
        self
    }

    /// Set the round cap per fight.
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds_per_fight = rounds;
        self
    }

    /// Enable or disable per-fight event replay.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose_output = verbose;
        self
    }

    /// Enable or disable the detailed per-character breakdown.
    pub fn with_detailed(mut self, detailed: bool) -> Self {
        self.show_detailed_results = detailed;
        self
    }

    /// Set the master RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
