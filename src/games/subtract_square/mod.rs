//! Subtract Square.
//!
//! - A counter starts at some non-negative whole number
//! - On your turn: subtract a positive perfect square no larger than it
//! - Whoever is to move when the counter reaches 0 loses

mod game;
mod state;

pub use game::SubtractSquare;
pub use state::SubtractSquareState;
