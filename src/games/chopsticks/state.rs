//! Chopsticks positions.
//!
//! ## Hand values
//!
//! Every hand is stored reduced modulo 5, so a stored value is always in
//! `0..5`. A hand holding 0 is dead: it can neither tap nor be tapped.
//! A player whose hands are both dead has lost.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerPair};
use crate::rules::{GameState, MoveList};

use super::moves::{ChopsticksMove, Hand};

/// Fingers per hand before it wraps back to dead.
pub const FINGERS: u32 = 5;

/// One player's two hands.
///
/// Serialized as `[left, right]`; deserializing goes through [`Hands::new`]
/// so stored values stay reduced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct Hands {
    left: u8,
    right: u8,
}

impl Hands {
    /// Create a pair of hands, reducing each value modulo 5.
    #[must_use]
    pub const fn new(left: u32, right: u32) -> Self {
        Self {
            left: (left % FINGERS) as u8,
            right: (right % FINGERS) as u8,
        }
    }

    #[must_use]
    pub const fn get(self, hand: Hand) -> u8 {
        match hand {
            Hand::Left => self.left,
            Hand::Right => self.right,
        }
    }

    #[must_use]
    pub const fn is_alive(self, hand: Hand) -> bool {
        self.get(hand) != 0
    }

    /// Both hands dead.
    #[must_use]
    pub const fn is_out(self) -> bool {
        self.left == 0 && self.right == 0
    }

    /// Copy of these hands with `hand` set to `value` (reduced modulo 5).
    #[must_use]
    pub const fn with(self, hand: Hand, value: u32) -> Self {
        match hand {
            Hand::Left => Self::new(value, self.right as u32),
            Hand::Right => Self::new(self.left as u32, value),
        }
    }
}

impl From<[u32; 2]> for Hands {
    fn from([left, right]: [u32; 2]) -> Self {
        Self::new(left, right)
    }
}

impl From<Hands> for [u32; 2] {
    fn from(hands: Hands) -> Self {
        [u32::from(hands.left), u32::from(hands.right)]
    }
}

/// A Chopsticks position: four hands and whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChopsticksState {
    current_player: Player,
    hands: PlayerPair<Hands>,
}

impl ChopsticksState {
    /// Create a position from each player's `[left, right]` counts.
    ///
    /// ```
    /// use rust_duel::core::Player;
    /// use rust_duel::games::chopsticks::{ChopsticksState, Hand};
    ///
    /// let s = ChopsticksState::new(Player::P2, [1, 1], [7, 5]);
    /// assert_eq!(s.hand(Player::P2, Hand::Left), 2);
    /// assert_eq!(s.hand(Player::P2, Hand::Right), 0);
    /// ```
    #[must_use]
    pub fn new(current_player: Player, p1: [u32; 2], p2: [u32; 2]) -> Self {
        Self {
            current_player,
            hands: PlayerPair::new(p1, p2).map(Hands::from),
        }
    }

    /// A player's hands.
    #[must_use]
    pub fn hands(&self, player: Player) -> Hands {
        self.hands[player]
    }

    /// A single hand's count.
    #[must_use]
    pub fn hand(&self, player: Player, hand: Hand) -> u8 {
        self.hands[player].get(hand)
    }

    /// Whether either player has both hands dead.
    #[must_use]
    pub fn has_player_out(&self) -> bool {
        self.hands.iter().any(|(_, hands)| hands.is_out())
    }
}

impl std::fmt::Display for ChopsticksState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p1 = self.hands[Player::P1];
        let p2 = self.hands[Player::P2];
        write!(
            f,
            "Player 1: Left {} - {} Right; Player 2: Left {} - {} Right",
            p1.left, p1.right, p2.left, p2.right
        )
    }
}

impl GameState for ChopsticksState {
    type Move = ChopsticksMove;

    fn current_player(&self) -> Player {
        self.current_player
    }

    /// `ll, lr, rl, rr`, keeping only moves where both hands are alive.
    fn possible_moves(&self) -> MoveList<ChopsticksMove> {
        let mine = self.hands[self.current_player];
        let theirs = self.hands[self.current_player.other()];

        ChopsticksMove::ALL
            .into_iter()
            .filter(|mv| mine.is_alive(mv.mover_hand()) && theirs.is_alive(mv.target_hand()))
            .collect()
    }

    fn transition(&self, mv: &ChopsticksMove) -> Self {
        let mover = self.current_player;
        let target = mover.other();

        let sum = u32::from(self.hand(mover, mv.mover_hand()))
            + u32::from(self.hand(target, mv.target_hand()));

        let mut hands = self.hands;
        hands[target] = hands[target].with(mv.target_hand(), sum);

        Self {
            current_player: target,
            hands,
        }
    }
}
