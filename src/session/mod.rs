//! Match driver: owns the turn loop for one game.

mod runner;

pub use runner::{Match, MatchOutcome, MoveRecord};
