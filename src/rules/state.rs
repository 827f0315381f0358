//! Game state trait: one immutable position in a game.
//!
//! States implement `GameState` to define:
//! - Whose turn it is
//! - Which moves are legal
//! - What position a move leads to
//!
//! A state is never mutated. Every transition builds a new value, so states
//! can be compared, hashed, and shared freely.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use smallvec::SmallVec;
use tracing::trace;

use crate::core::{GameError, Player};

/// Legal moves from a position, in the order the game defines.
///
/// Most positions offer a handful of moves, so they stay inline.
pub type MoveList<M> = SmallVec<[M; 8]>;

/// A position in a two-player, sequential-move, perfect-information game.
///
/// ## Implementation Notes
///
/// - `possible_moves`: Must be deterministic; empty means the mover is stuck
/// - `transition`: Only called with moves that passed `is_valid_move`
/// - Equality is structural: same variant, same player, same payload
pub trait GameState: Clone + PartialEq + Eq + Hash + Debug + Display {
    /// The variant's move type.
    type Move: Clone + PartialEq + Eq + Hash + Debug + Display;

    /// The player about to move.
    fn current_player(&self) -> Player;

    /// Enumerate every legal move for the current player.
    fn possible_moves(&self) -> MoveList<Self::Move>;

    /// Build the successor position for a move known to be legal.
    ///
    /// The returned state has the turn passed to the other player.
    fn transition(&self, mv: &Self::Move) -> Self;

    /// Check whether `mv` is one of `possible_moves()`.
    fn is_valid_move(&self, mv: &Self::Move) -> bool {
        self.possible_moves().contains(mv)
    }

    /// Whether the current player has any legal move.
    fn has_moves(&self) -> bool {
        !self.possible_moves().is_empty()
    }

    /// Apply a move, returning the new state.
    ///
    /// Fails with `GameError::InvalidMove` if `mv` is not legal here; no
    /// transition is computed in that case.
    fn make_move(&self, mv: &Self::Move) -> Result<Self, GameError> {
        if !self.is_valid_move(mv) {
            return Err(GameError::invalid_move(self.current_player(), mv));
        }

        let next = self.transition(mv);
        trace!(player = %self.current_player(), mv = %mv, from = %self, to = %next, "state transition");
        Ok(next)
    }
}
