//! Core engine types: players, errors, RNG, configuration.
//!
//! This module contains the building blocks shared by every game.
//! Games plug into these via the traits in `rules` rather than modifying
//! the core.

pub mod player;
pub mod error;
pub mod rng;
pub mod config;

pub use player::{ParsePlayerError, Player, PlayerPair};
pub use error::GameError;
pub use rng::{GameRng, GameRngState};
pub use config::MatchConfig;
