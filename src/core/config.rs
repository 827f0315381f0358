//! Match configuration.

use serde::{Deserialize, Serialize};

/// Parameters for running a match between two strategies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Maximum number of moves before the match is abandoned (0 = unlimited).
    pub max_turns: u32,

    /// How many times a strategy is asked for a move on one turn before the
    /// driver gives up. Malformed and illegal moves each use one attempt.
    pub max_attempts: u32,

    /// Seed for random strategies built from this config.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_turns: 0,
            max_attempts: 3,
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Create a new config with a turn limit.
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }

    /// Create a new config with a per-turn attempt limit.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Whether `turns` moves have used up the turn limit.
    #[must_use]
    pub fn turn_limit_reached(&self, turns: u32) -> bool {
        self.max_turns > 0 && turns >= self.max_turns
    }
}
