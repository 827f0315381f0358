//! Strategies: ways of picking a move for the player to act.
//!
//! A strategy looks at the game once and answers with a single move. No
//! strategy here looks ahead or evaluates future positions.
//!
//! - `RandomStrategy`: Uniform choice among the legal moves
//! - `InteractiveStrategy`: Reads move notation from a text source

mod interactive;
mod random;

pub use interactive::InteractiveStrategy;
pub use random::RandomStrategy;

use crate::core::GameError;
use crate::rules::{Game, MoveOf};

/// Picks a move for whoever is to act in `game`.
///
/// A returned move is not guaranteed to be legal; callers check it with
/// `is_valid_move` (or `Game::play`) before use.
pub trait Strategy<G: Game> {
    /// Choose a move for the current player.
    fn choose_move(&mut self, game: &G) -> Result<MoveOf<G>, GameError>;

    /// Name for logs.
    fn name(&self) -> &str;
}
