//! Game and state traits for game implementations.
//!
//! Games implement `GameState` and `Game` to define:
//! - Legal moves for each position
//! - How moves produce new positions
//! - When the game ends and who won
//!
//! Strategies and the match driver call into these traits but never
//! interpret game-specific concepts directly.

pub mod game;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use game::{Game, MoveOf};
pub use state::{GameState, MoveList};
