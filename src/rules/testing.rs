//! Minimal take-one-or-two game used to exercise the trait defaults.

use crate::core::{GameError, Player};

use super::game::Game;
use super::state::{GameState, MoveList};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Countdown {
    player: Player,
    remaining: u8,
}

impl Countdown {
    pub fn new(player: Player, remaining: u8) -> Self {
        Self { player, remaining }
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to move, {} left", self.player, self.remaining)
    }
}

impl GameState for Countdown {
    type Move = u8;

    fn current_player(&self) -> Player {
        self.player
    }

    fn possible_moves(&self) -> MoveList<u8> {
        (1..=2).filter(|&m| m <= self.remaining).collect()
    }

    fn transition(&self, mv: &u8) -> Self {
        Self::new(self.player.other(), self.remaining - mv)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountdownGame {
    first_player: Player,
    current_state: Countdown,
}

impl CountdownGame {
    pub fn new(first_player: Player, remaining: u8) -> Self {
        Self {
            first_player,
            current_state: Countdown::new(first_player, remaining),
        }
    }
}

impl std::fmt::Display for CountdownGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.current_state)
    }
}

impl Game for CountdownGame {
    type State = Countdown;

    fn first_player(&self) -> Player {
        self.first_player
    }

    fn current_state(&self) -> &Countdown {
        &self.current_state
    }

    fn set_current_state(&mut self, state: Countdown) {
        self.current_state = state;
    }

    fn instructions(&self) -> &'static str {
        "Take one or two. Whoever cannot move loses."
    }

    fn is_over(&self, state: &Countdown) -> bool {
        state.remaining == 0
    }

    fn str_to_move(&self, text: &str) -> Result<u8, GameError> {
        text.trim().parse().map_err(|_| GameError::MalformedMove {
            input: text.to_string(),
            reason: "expected 1 or 2".to_string(),
        })
    }
}
