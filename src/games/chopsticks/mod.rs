//! Chopsticks.
//!
//! - Each player starts with one finger raised on each hand
//! - On your turn: tap one of the opponent's hands with one of yours,
//!   adding your count to theirs (modulo 5)
//! - A hand at 0 is dead; first player with both hands dead loses

mod game;
mod moves;
mod state;

pub use game::Chopsticks;
pub use moves::{ChopsticksMove, Hand, ParseMoveError};
pub use state::{ChopsticksState, Hands, FINGERS};
