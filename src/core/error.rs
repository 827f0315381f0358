//! Errors surfaced by games, strategies, and the match driver.
//!
//! Nothing in the core retries: every error goes straight back to the
//! immediate caller. Only `Match` re-asks a strategy, and only up to its
//! configured attempt limit.

use thiserror::Error;

use super::player::Player;

/// Errors that can occur while reading, validating, or applying moves.
#[derive(Debug, Error)]
pub enum GameError {
    /// The text could not be parsed as a move at all.
    #[error("malformed move {input:?}: {reason}")]
    MalformedMove { input: String, reason: String },

    /// The move is not among the legal moves of the current state.
    #[error("{player} cannot play {mv}")]
    InvalidMove { player: Player, mv: String },

    /// A strategy was asked for a move but the mover has none.
    #[error("{player} has no moves available")]
    NoMovesAvailable { player: Player },

    /// The interactive move source reached end of input.
    #[error("move input closed")]
    InputClosed,

    /// The driver stopped re-asking a strategy for a usable move.
    #[error("{player} failed to produce a valid move in {attempts} attempts")]
    TooManyAttempts { player: Player, attempts: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Build an `InvalidMove` from anything that renders as move notation.
    pub fn invalid_move(player: Player, mv: impl std::fmt::Display) -> Self {
        GameError::InvalidMove {
            player,
            mv: mv.to_string(),
        }
    }

    /// Whether asking the same source again could succeed.
    ///
    /// True for bad input and illegal moves, false for everything else.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::MalformedMove { .. } | GameError::InvalidMove { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::invalid_move(Player::P1, 7);
        assert_eq!(err.to_string(), "Player 1 cannot play 7");

        let err = GameError::MalformedMove {
            input: "abc".to_string(),
            reason: "your move must be an integer".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed move \"abc\": your move must be an integer"
        );

        let err = GameError::TooManyAttempts {
            player: Player::P2,
            attempts: 3,
        };
        assert_eq!(
            err.to_string(),
            "Player 2 failed to produce a valid move in 3 attempts"
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(GameError::invalid_move(Player::P1, "lr").is_recoverable());
        assert!(GameError::MalformedMove {
            input: String::new(),
            reason: String::new(),
        }
        .is_recoverable());
        assert!(!GameError::InputClosed.is_recoverable());
        assert!(!GameError::NoMovesAvailable { player: Player::P2 }.is_recoverable());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: GameError = io.into();
        assert!(matches!(err, GameError::Io(_)));
        assert!(!err.is_recoverable());
    }
}
