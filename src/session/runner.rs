//! Turn loop between two strategies.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{GameError, MatchConfig, Player};
use crate::rules::{Game, GameState, MoveOf};
use crate::strategy::Strategy;

/// A move that was accepted by the driver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord<M> {
    /// The player who made this move.
    pub player: Player,

    /// The move made.
    pub mv: M,

    /// 1-based turn number.
    pub turn: u32,
}

/// How a match ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome<M> {
    /// The winner, or `None` if the turn limit stopped the match first.
    pub winner: Option<Player>,

    /// Number of moves played.
    pub turns: u32,

    /// Every accepted move, in order.
    pub moves: Vec<MoveRecord<M>>,
}

/// Runs a game to completion, asking each seat's strategy for moves.
///
/// Each turn the mover's strategy is asked for a move; the move is checked
/// against the current position and, if legal, the successor position
/// replaces the current one. Malformed or illegal moves are re-asked up to
/// `MatchConfig::max_attempts` times.
#[derive(Clone, Debug)]
pub struct Match<G: Game> {
    game: G,
    config: MatchConfig,
}

impl<G: Game> Match<G> {
    pub fn new(game: G, config: MatchConfig) -> Self {
        Self { game, config }
    }

    /// The game being played.
    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Take the game back, in whatever position it reached.
    pub fn into_game(self) -> G {
        self.game
    }

    /// Play a single move for whoever is to act.
    ///
    /// Returns the accepted move. Errors that re-asking cannot fix (closed
    /// input, no moves, I/O) are returned immediately.
    pub fn play_turn<S>(&mut self, strategy: &mut S) -> Result<MoveOf<G>, GameError>
    where
        S: Strategy<G> + ?Sized,
    {
        let player = self.game.current_state().current_player();
        let max_attempts = self.config.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            let result = strategy
                .choose_move(&self.game)
                .and_then(|mv| self.game.play(&mv).map(|()| mv));

            match result {
                Ok(mv) => {
                    debug!(player = %player, strategy = strategy.name(), mv = %mv, "move accepted");
                    return Ok(mv);
                }
                Err(err) if err.is_recoverable() => {
                    warn!(
                        player = %player,
                        strategy = strategy.name(),
                        attempt,
                        error = %err,
                        "move rejected"
                    );
                }
                Err(err) => return Err(err),
            }
        }

        Err(GameError::TooManyAttempts {
            player,
            attempts: max_attempts,
        })
    }

    /// Play until the game is over or the turn limit is hit.
    pub fn run<S1, S2>(
        &mut self,
        p1: &mut S1,
        p2: &mut S2,
    ) -> Result<MatchOutcome<MoveOf<G>>, GameError>
    where
        S1: Strategy<G> + ?Sized,
        S2: Strategy<G> + ?Sized,
    {
        let mut moves = Vec::new();
        let mut turns = 0;

        while !self.game.is_over(self.game.current_state()) {
            if self.config.turn_limit_reached(turns) {
                info!(turns, "turn limit reached");
                return Ok(MatchOutcome {
                    winner: None,
                    turns,
                    moves,
                });
            }

            let player = self.game.current_state().current_player();
            let mv = match player {
                Player::P1 => self.play_turn(p1)?,
                Player::P2 => self.play_turn(p2)?,
            };

            turns += 1;
            moves.push(MoveRecord {
                player,
                mv,
                turn: turns,
            });
        }

        let winner = self.game.winner();
        info!(turns, winner = ?winner, final_state = %self.game, "match finished");

        Ok(MatchOutcome {
            winner,
            turns,
            moves,
        })
    }
}
