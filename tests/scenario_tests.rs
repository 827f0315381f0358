//! Worked positions for both games, checked through the public API.

use rust_duel::{
    Chopsticks, ChopsticksMove, ChopsticksState, Game, GameError, GameState, Player,
    SubtractSquare, SubtractSquareState,
};

// =============================================================================
// Subtract Square
// =============================================================================

#[test]
fn test_subtract_square_moves_and_transition() {
    let state = SubtractSquareState::new(Player::P2, 28);
    assert_eq!(state.possible_moves().to_vec(), vec![1, 4, 9, 16, 25]);

    let next = state.make_move(&16).unwrap();
    assert_eq!(next, SubtractSquareState::new(Player::P1, 12));
}

#[test]
fn test_subtract_square_terminal_position() {
    let state = SubtractSquareState::new(Player::P1, 0);
    let game = SubtractSquare::new(Player::P1, 5);

    assert!(state.possible_moves().is_empty());
    assert!(game.is_over(&state));
}

#[test]
fn test_subtract_square_full_game() {
    let mut game = SubtractSquare::new(Player::P1, 13);

    for (text, mover) in [("9", Player::P1), ("4", Player::P2)] {
        assert_eq!(game.current_state().current_player(), mover);
        let mv = game.str_to_move(text).unwrap();
        assert!(game.current_state().is_valid_move(&mv));
        game.play(&mv).unwrap();
    }

    assert!(game.is_over(game.current_state()));
    assert!(game.is_winner(Player::P2));
    assert!(!game.is_winner(Player::P1));
}

#[test]
fn test_subtract_square_rejects_bad_input() {
    let mut game = SubtractSquare::new(Player::P1, 8);

    assert!(matches!(
        game.str_to_move("eight"),
        Err(GameError::MalformedMove { .. })
    ));

    let mv = game.str_to_move("5").unwrap();
    assert!(!game.current_state().is_valid_move(&mv));
    assert!(matches!(game.play(&mv), Err(GameError::InvalidMove { .. })));
    assert_eq!(game.current_state().current_value(), 8);
}

// =============================================================================
// Chopsticks
// =============================================================================

#[test]
fn test_chopsticks_dead_target_hand_excluded() {
    let state = ChopsticksState::new(Player::P1, [1, 3], [2, 0]);
    assert_eq!(
        state.possible_moves().to_vec(),
        vec![ChopsticksMove::LL, ChopsticksMove::RL]
    );
}

#[test]
fn test_chopsticks_sum_wraps_modulo_five() {
    let state = ChopsticksState::new(Player::P1, [4, 3], [2, 0]);
    let next = state.make_move(&ChopsticksMove::LL).unwrap();
    assert_eq!(next, ChopsticksState::new(Player::P2, [4, 3], [1, 0]));
}

#[test]
fn test_chopsticks_winner() {
    let game = Chopsticks::with_state(
        Player::P1,
        ChopsticksState::new(Player::P2, [0, 0], [1, 4]),
    );

    assert!(game.is_winner(Player::P1));
    assert!(!game.is_winner(Player::P2));
    assert_eq!(game.winner(), Some(Player::P1));
}

#[test]
fn test_chopsticks_knockout_sequence() {
    let mut game = Chopsticks::with_state(
        Player::P1,
        ChopsticksState::new(Player::P1, [3, 0], [2, 0]),
    );

    // 3 + 2 = 5 kills P2's last live hand
    let mv = game.str_to_move("ll").unwrap();
    game.play(&mv).unwrap();

    assert_eq!(
        game.current_state(),
        &ChopsticksState::new(Player::P2, [3, 0], [0, 0])
    );
    assert!(game.current_state().possible_moves().is_empty());
    assert_eq!(game.winner(), Some(Player::P1));
}

#[test]
fn test_chopsticks_unknown_notation_is_invalid() {
    let game = Chopsticks::new(Player::P2);

    for text in ["wrr", "rm", "", "left"] {
        assert!(matches!(
            game.str_to_move(text),
            Err(GameError::InvalidMove { player: Player::P2, .. })
        ));
    }
}

#[test]
fn test_instructions_are_available() {
    assert!(!SubtractSquare::new(Player::P1, 1).instructions().is_empty());
    assert!(!Chopsticks::new(Player::P1).instructions().is_empty());
}
