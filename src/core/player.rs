//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! One of exactly two seats, `P1` or `P2`. Never a number or a bool, so
//! there is no player index to get off by one.
//!
//! ## PlayerPair
//!
//! One value per player, indexable by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// A seat in a two-player game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Both players, in seat order.
    pub const ALL: [Player; 2] = [Player::P1, Player::P2];

    /// Pick the seat that moves first.
    #[must_use]
    pub const fn first(is_p1_turn: bool) -> Self {
        if is_p1_turn {
            Player::P1
        } else {
            Player::P2
        }
    }

    /// The opponent of this player.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// Short notation (`"p1"` / `"p2"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Player::P1 => "p1",
            Player::P2 => "p2",
        }
    }

    /// Seat number as shown to people (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::P1 => 1,
            Player::P2 => 2,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Error returned when parsing anything other than `p1` or `p2`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown player {0:?} (expected \"p1\" or \"p2\")")]
pub struct ParsePlayerError(pub String);

impl FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "p1" => Ok(Player::P1),
            "p2" => Ok(Player::P2),
            other => Err(ParsePlayerError(other.to_string())),
        }
    }
}

/// Per-player data storage.
///
/// ## Example
///
/// ```
/// use rust_duel::core::{Player, PlayerPair};
///
/// let mut score = PlayerPair::new(0, 0);
/// score[Player::P2] += 3;
///
/// assert_eq!(score[Player::P1], 0);
/// assert_eq!(score[Player::P2], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    p1: T,
    p2: T,
}

impl<T> PlayerPair<T> {
    /// Create a pair from each player's value.
    pub const fn new(p1: T, p2: T) -> Self {
        Self { p1, p2 }
    }

    /// Get a reference to a player's value.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        match player {
            Player::P1 => &self.p1,
            Player::P2 => &self.p2,
        }
    }

    /// Get a mutable reference to a player's value.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        match player {
            Player::P1 => &mut self.p1,
            Player::P2 => &mut self.p2,
        }
    }

    /// Iterate over (Player, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        [(Player::P1, &self.p1), (Player::P2, &self.p2)].into_iter()
    }

    /// Apply `f` to both values.
    pub fn map<U>(self, f: impl Fn(T) -> U) -> PlayerPair<U> {
        PlayerPair {
            p1: f(self.p1),
            p2: f(self.p2),
        }
    }
}

impl<T> Index<Player> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerPair<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
