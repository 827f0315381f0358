//! Subtract Square game implementation.

use std::num::{IntErrorKind, ParseIntError};

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Player};
use crate::rules::{Game, GameState};

use super::state::SubtractSquareState;

const INSTRUCTIONS: &str = "\
A subtract square game is played as follows:
A non-negative whole number is chosen as the starting value by some
neutral entity. Players take turns subtracting square values (such
as 1, 4, 9, ...) from the current value, provided the chosen square
is not larger. When no moves are possible, whoever is about to play
at that point loses!";

/// A game of Subtract Square.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtractSquare {
    first_player: Player,
    starting_value: u32,
    current_state: SubtractSquareState,
}

impl SubtractSquare {
    /// Start a game at `starting_value` with `first_player` to move.
    #[must_use]
    pub fn new(first_player: Player, starting_value: u32) -> Self {
        Self::with_state(
            first_player,
            SubtractSquareState::new(first_player, starting_value),
        )
    }

    /// Resume a game from an arbitrary position.
    ///
    /// The position's counter becomes the starting value.
    #[must_use]
    pub fn with_state(first_player: Player, state: SubtractSquareState) -> Self {
        Self {
            first_player,
            starting_value: state.current_value(),
            current_state: state,
        }
    }

    /// The counter the game started from.
    #[must_use]
    pub fn starting_value(&self) -> u32 {
        self.starting_value
    }
}

impl std::fmt::Display for SubtractSquare {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.current_state)
    }
}

impl Game for SubtractSquare {
    type State = SubtractSquareState;

    fn first_player(&self) -> Player {
        self.first_player
    }

    fn current_state(&self) -> &SubtractSquareState {
        &self.current_state
    }

    fn set_current_state(&mut self, state: SubtractSquareState) {
        self.current_state = state;
    }

    fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    fn is_over(&self, state: &SubtractSquareState) -> bool {
        state.current_value() == 0
    }

    /// Parse an integer move.
    ///
    /// Non-numeric text is malformed. A number that cannot be a square of
    /// the counter (negative, or beyond `u32`) is an invalid move.
    fn str_to_move(&self, text: &str) -> Result<u32, GameError> {
        let trimmed = text.trim();
        let player = self.current_state.current_player();
        let value: i64 = trimmed.parse().map_err(|e: ParseIntError| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                GameError::invalid_move(player, trimmed)
            }
            _ => GameError::MalformedMove {
                input: trimmed.to_string(),
                reason: format!("{e}; your move must be an integer"),
            },
        })?;

        u32::try_from(value).map_err(|_| GameError::invalid_move(player, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = SubtractSquare::new(Player::P2, 20);

        assert_eq!(game.first_player(), Player::P2);
        assert_eq!(game.starting_value(), 20);
        assert_eq!(game.current_state(), &SubtractSquareState::new(Player::P2, 20));
        assert!(!game.is_over(game.current_state()));
    }

    #[test]
    fn test_display_shows_current_state() {
        let game = SubtractSquare::new(Player::P1, 9);
        assert_eq!(
            game.to_string(),
            "The current player is Player 1 and the current value is 9"
        );
    }

    #[test]
    fn test_instructions() {
        let game = SubtractSquare::new(Player::P1, 9);
        assert!(game.instructions().starts_with("A subtract square game"));
    }

    #[test]
    fn test_is_over() {
        let game = SubtractSquare::new(Player::P1, 9);
        assert!(game.is_over(&SubtractSquareState::new(Player::P1, 0)));
        assert!(game.is_over(&SubtractSquareState::new(Player::P2, 0)));
        assert!(!game.is_over(&SubtractSquareState::new(Player::P2, 1)));
    }

    #[test]
    fn test_is_winner() {
        let mut game = SubtractSquare::new(Player::P1, 4);
        assert!(!game.is_winner(Player::P1));
        assert!(!game.is_winner(Player::P2));

        game.play(&4).unwrap();

        // P2 is to move with nothing left
        assert!(game.is_winner(Player::P1));
        assert!(!game.is_winner(Player::P2));
    }

    #[test]
    fn test_zero_start_is_already_over() {
        let game = SubtractSquare::new(Player::P1, 0);
        assert!(game.is_over(game.current_state()));
        assert_eq!(game.winner(), Some(Player::P2));
    }

    #[test]
    fn test_str_to_move() {
        let game = SubtractSquare::new(Player::P1, 9);

        assert_eq!(game.str_to_move("4").unwrap(), 4);
        assert_eq!(game.str_to_move(" 16\n").unwrap(), 16);

        assert!(matches!(
            game.str_to_move("four"),
            Err(GameError::MalformedMove { .. })
        ));
        assert!(matches!(
            game.str_to_move(""),
            Err(GameError::MalformedMove { .. })
        ));
        assert!(matches!(
            game.str_to_move("-25"),
            Err(GameError::InvalidMove { player: Player::P1, .. })
        ));
        assert!(matches!(
            game.str_to_move("4294967296"),
            Err(GameError::InvalidMove { player: Player::P1, .. })
        ));
        assert!(matches!(
            game.str_to_move("99999999999999999999"),
            Err(GameError::InvalidMove { player: Player::P1, .. })
        ));
        assert!(matches!(
            game.str_to_move("-99999999999999999999"),
            Err(GameError::InvalidMove { player: Player::P1, .. })
        ));
    }

    #[test]
    fn test_equality() {
        let a = SubtractSquare::new(Player::P1, 10);
        assert_eq!(a, SubtractSquare::new(Player::P1, 10));
        assert_ne!(a, SubtractSquare::new(Player::P2, 10));
        assert_ne!(a, SubtractSquare::new(Player::P1, 11));

        // Same position reached from a different start
        let mut b = SubtractSquare::new(Player::P1, 11);
        b.set_current_state(SubtractSquareState::new(Player::P1, 10));
        assert_ne!(a, b);
    }

    #[test]
    fn test_with_state() {
        let game = SubtractSquare::with_state(Player::P1, SubtractSquareState::new(Player::P2, 12));
        assert_eq!(game.first_player(), Player::P1);
        assert_eq!(game.starting_value(), 12);
        assert_eq!(game.current_state().current_player(), Player::P2);
    }
}
