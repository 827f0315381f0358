//! Subtract Square positions.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::rules::{GameState, MoveList};

/// A Subtract Square position: the counter and whose turn it is.
///
/// The counter only ever goes down, each time by a positive perfect square
/// no larger than the counter itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubtractSquareState {
    current_player: Player,
    current_value: u32,
}

impl SubtractSquareState {
    #[must_use]
    pub const fn new(current_player: Player, current_value: u32) -> Self {
        Self {
            current_player,
            current_value,
        }
    }

    /// The counter.
    #[must_use]
    pub const fn current_value(&self) -> u32 {
        self.current_value
    }
}

impl std::fmt::Display for SubtractSquareState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The current player is Player {} and the current value is {}",
            self.current_player.number(),
            self.current_value
        )
    }
}

impl GameState for SubtractSquareState {
    type Move = u32;

    fn current_player(&self) -> Player {
        self.current_player
    }

    /// Every square `k²` with `k ≥ 1` and `k² ≤ current_value`, ascending.
    fn possible_moves(&self) -> MoveList<u32> {
        // u64 so that squaring past u32::MAX ends the walk instead of overflowing
        let limit = u64::from(self.current_value);
        (1u64..)
            .map(|k| k * k)
            .take_while(|&square| square <= limit)
            .map(|square| square as u32)
            .collect()
    }

    fn transition(&self, mv: &u32) -> Self {
        Self::new(self.current_player.other(), self.current_value - mv)
    }
}
