//! Chopsticks game implementation.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Player};
use crate::rules::{Game, GameState};

use super::moves::ChopsticksMove;
use super::state::ChopsticksState;

const INSTRUCTIONS: &str = "\
Players take turns adding the value of one of their hands
to the value of one of their opponents' hands (modulo 5).
A hand with a value of 5 (or 0; 5 modulo 5) is considered
'dead'. The first player to have both hands dead loses the
game.";

/// A game of Chopsticks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chopsticks {
    first_player: Player,
    current_state: ChopsticksState,
}

impl Chopsticks {
    /// Start a game with one finger on every hand.
    #[must_use]
    pub fn new(first_player: Player) -> Self {
        Self::with_state(first_player, ChopsticksState::new(first_player, [1, 1], [1, 1]))
    }

    /// Resume a game from an arbitrary position.
    #[must_use]
    pub fn with_state(first_player: Player, state: ChopsticksState) -> Self {
        Self {
            first_player,
            current_state: state,
        }
    }
}

impl std::fmt::Display for Chopsticks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.current_state)
    }
}

impl Game for Chopsticks {
    type State = ChopsticksState;

    fn first_player(&self) -> Player {
        self.first_player
    }

    fn current_state(&self) -> &ChopsticksState {
        &self.current_state
    }

    fn set_current_state(&mut self, state: ChopsticksState) {
        self.current_state = state;
    }

    fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    fn is_over(&self, state: &ChopsticksState) -> bool {
        state.has_player_out()
    }

    /// Parse `ll`/`lr`/`rl`/`rr`.
    ///
    /// Any other text is reported as an invalid move, exactly as if it had
    /// been looked up among the legal moves and not found.
    fn str_to_move(&self, text: &str) -> Result<ChopsticksMove, GameError> {
        text.trim()
            .parse()
            .map_err(|_| GameError::invalid_move(self.current_state.current_player(), text.trim()))
    }
}
