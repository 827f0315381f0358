//! Hands and hand-to-hand moves.
//!
//! Moves are written as two characters: the mover's hand, then the
//! opponent hand it taps. `"lr"` means "my left taps your right".

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A hand: left or right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    /// Notation character (`'l'` / `'r'`).
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Hand::Left => 'l',
            Hand::Right => 'r',
        }
    }

    /// Parse a notation character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'l' => Some(Hand::Left),
            'r' => Some(Hand::Right),
            _ => None,
        }
    }
}

/// One Chopsticks move: which of my hands taps which of yours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChopsticksMove {
    LL,
    LR,
    RL,
    RR,
}

impl ChopsticksMove {
    /// Every move, in enumeration order.
    pub const ALL: [ChopsticksMove; 4] = [
        ChopsticksMove::LL,
        ChopsticksMove::LR,
        ChopsticksMove::RL,
        ChopsticksMove::RR,
    ];

    #[must_use]
    pub const fn new(mover: Hand, target: Hand) -> Self {
        match (mover, target) {
            (Hand::Left, Hand::Left) => ChopsticksMove::LL,
            (Hand::Left, Hand::Right) => ChopsticksMove::LR,
            (Hand::Right, Hand::Left) => ChopsticksMove::RL,
            (Hand::Right, Hand::Right) => ChopsticksMove::RR,
        }
    }

    /// The mover's hand that is added.
    #[must_use]
    pub const fn mover_hand(self) -> Hand {
        match self {
            ChopsticksMove::LL | ChopsticksMove::LR => Hand::Left,
            ChopsticksMove::RL | ChopsticksMove::RR => Hand::Right,
        }
    }

    /// The opponent's hand that receives the sum.
    #[must_use]
    pub const fn target_hand(self) -> Hand {
        match self {
            ChopsticksMove::LL | ChopsticksMove::RL => Hand::Left,
            ChopsticksMove::LR | ChopsticksMove::RR => Hand::Right,
        }
    }
}

impl std::fmt::Display for ChopsticksMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.mover_hand().as_char(), self.target_hand().as_char())
    }
}

/// Error returned for text that is not one of `ll`, `lr`, `rl`, `rr`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown chopsticks move {0:?}")]
pub struct ParseMoveError(pub String);

impl FromStr for ChopsticksMove {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(m), Some(t), None) => match (Hand::from_char(m), Hand::from_char(t)) {
                (Some(mover), Some(target)) => Ok(ChopsticksMove::new(mover, target)),
                _ => Err(ParseMoveError(s.to_string())),
            },
            _ => Err(ParseMoveError(s.to_string())),
        }
    }
}
