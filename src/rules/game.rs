//! Game trait: a rule set wrapped around its current position.
//!
//! A `Game` owns exactly one current state. The driver asks the state for
//! moves, checks them, and hands the successor back with
//! `set_current_state` (or `play`, which does all three).

use std::fmt::Display;

use crate::core::{GameError, Player};

use super::state::GameState;

/// The move type of a game's states.
pub type MoveOf<G> = <<G as Game>::State as GameState>::Move;

/// A two-player, sequential-move, zero-sum, perfect-information game.
///
/// `Display` renders the current position.
pub trait Game: Display {
    /// The position type of this game.
    type State: GameState;

    /// The player that was to move when the game was created.
    fn first_player(&self) -> Player;

    /// The current position.
    fn current_state(&self) -> &Self::State;

    /// Replace the current position with its successor.
    fn set_current_state(&mut self, state: Self::State);

    /// Rules text for players.
    fn instructions(&self) -> &'static str;

    /// Check whether `state` is terminal under this game's rules.
    ///
    /// Works on any state, not only the current one.
    fn is_over(&self, state: &Self::State) -> bool;

    /// Parse external move notation.
    fn str_to_move(&self, text: &str) -> Result<<Self::State as GameState>::Move, GameError>;

    /// Check whether `player` has won the current position.
    ///
    /// Once the current state is terminal, the player who is *not* to move
    /// wins. Before that, nobody has.
    fn is_winner(&self, player: Player) -> bool {
        let state = self.current_state();
        self.is_over(state) && state.current_player() != player
    }

    /// The winner of the current position, if it is terminal.
    fn winner(&self) -> Option<Player> {
        Player::ALL.into_iter().find(|&p| self.is_winner(p))
    }

    /// Validate and apply a move to the current position.
    fn play(&mut self, mv: &<Self::State as GameState>::Move) -> Result<(), GameError> {
        let next = self.current_state().make_move(mv)?;
        self.set_current_state(next);
        Ok(())
    }
}
