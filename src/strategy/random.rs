//! Uniform random move selection.

use crate::core::{GameError, GameRng, GameRngState, MatchConfig};
use crate::rules::{Game, GameState, MoveOf};

use super::Strategy;

/// Selects uniformly from the legal moves of the current position.
///
/// Seeded, so the same seed replays the same choices.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    /// Create a strategy with its own seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Create a strategy drawing from an existing stream.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Create a strategy seeded from a match configuration.
    #[must_use]
    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(config.seed)
    }

    /// Snapshot of the underlying RNG, for resuming later.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl<G: Game> Strategy<G> for RandomStrategy {
    fn choose_move(&mut self, game: &G) -> Result<MoveOf<G>, GameError> {
        let state = game.current_state();
        let moves = state.possible_moves();

        self.rng
            .choose(&moves)
            .cloned()
            .ok_or(GameError::NoMovesAvailable {
                player: state.current_player(),
            })
    }

    fn name(&self) -> &str {
        "Random"
    }
}
