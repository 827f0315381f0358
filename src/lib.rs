//! # rust-duel
//!
//! A small engine for two-player, sequential-move, zero-sum,
//! perfect-information games.
//!
//! ## Design Principles
//!
//! 1. **Immutable Positions**: A `GameState` is never mutated. Every move
//!    produces a new value, so positions compare and hash structurally.
//!
//! 2. **Typed Moves**: Each game has its own move type (`u32` squares,
//!    `ChopsticksMove` codes). Text notation is only parsed at the edge,
//!    via `Game::str_to_move`.
//!
//! 3. **No Lookahead**: Strategies pick one move from the current position.
//!    There is no search or evaluation of future positions.
//!
//! ## Modules
//!
//! - `core`: Players, errors, RNG, configuration
//! - `rules`: `GameState` and `Game` traits
//! - `games`: Subtract Square and Chopsticks
//! - `strategy`: Random and interactive move selection
//! - `session`: Match driver (turn loop)
//!
//! ## Example
//!
//! ```
//! use rust_duel::{Game, GameState, Player, SubtractSquare};
//!
//! let mut game = SubtractSquare::new(Player::P2, 28);
//! assert_eq!(game.current_state().possible_moves().to_vec(), vec![1, 4, 9, 16, 25]);
//!
//! game.play(&16).unwrap();
//! assert_eq!(game.current_state().current_value(), 12);
//! assert_eq!(game.current_state().current_player(), Player::P1);
//! ```

pub mod core;
pub mod rules;
pub mod games;
pub mod strategy;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, GameRngState, MatchConfig, Player, PlayerPair};

pub use crate::rules::{Game, GameState, MoveList, MoveOf};

pub use crate::games::chopsticks::{Chopsticks, ChopsticksMove, ChopsticksState, Hand, Hands};
pub use crate::games::subtract_square::{SubtractSquare, SubtractSquareState};

pub use crate::strategy::{InteractiveStrategy, RandomStrategy, Strategy};

pub use crate::session::{Match, MatchOutcome, MoveRecord};
