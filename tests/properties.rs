//! Randomized checks of the move protocol on a 9x9 board.

use proptest::prelude::*;

use capture_go::board::{Board, Color};
use capture_go::config::GameConfig;
use capture_go::game::{GameSession, MoveError};

const SIZE: usize = 9;

/// `None` is a pass.
fn actions() -> impl Strategy<Value = Vec<Option<(usize, usize)>>> {
    prop::collection::vec(
        prop_oneof![
            1 => Just(None::<(usize, usize)>),
            30 => (0..SIZE, 0..SIZE).prop_map(Some),
        ],
        0..250,
    )
}

fn new_game() -> GameSession {
    GameSession::with_config(GameConfig::with_board_size(SIZE)).unwrap()
}

/// Every stone on the board belongs to a group with at least one liberty.
fn all_groups_alive(board: &Board) -> bool {
    (0..SIZE).all(|y| {
        (0..SIZE).all(|x| match board.get(x, y) {
            Ok(cell) if !cell.is_empty() => board.count_liberties(x, y).0 > 0,
            _ => true,
        })
    })
}

proptest! {
    #[test]
    fn rejected_moves_leave_board_and_scores(actions in actions()) {
        let mut game = new_game();
        for action in actions {
            if game.is_ended() {
                game.reset();
            }
            let Some((x, y)) = action else {
                game.pass();
                continue;
            };
            let before = game.snapshot();
            match game.attempt_move(x, y) {
                Ok(_) => {}
                Err(MoveError::Occupied) => {
                    prop_assert_eq!(game.snapshot(), before);
                }
                Err(MoveError::Suicide) => {
                    let after = game.snapshot();
                    prop_assert_eq!(&after.board, &before.board);
                    prop_assert_eq!(after.black_score, before.black_score);
                    prop_assert_eq!(after.white_score, before.white_score);
                    prop_assert_eq!(after.pass_count, before.pass_count);
                    prop_assert_eq!(after.to_move, before.to_move.opponent());
                }
                Err(err) => prop_assert!(false, "unexpected error {}", err),
            }
        }
    }

    #[test]
    fn no_dead_groups_after_any_move(actions in actions()) {
        let mut game = new_game();
        for action in actions {
            if game.is_ended() {
                game.reset();
            }
            match action {
                Some((x, y)) => {
                    let _ = game.attempt_move(x, y);
                }
                None => {
                    game.pass();
                }
            }
            prop_assert!(all_groups_alive(game.board()));
        }
    }

    #[test]
    fn stones_on_board_match_placements_minus_captures(
        points in prop::collection::vec((0..SIZE, 0..SIZE), 0..250)
    ) {
        let mut game = new_game();
        let mut placed = [0usize; 2];
        for (x, y) in points {
            if let Ok(placement) = game.attempt_move(x, y) {
                placed[placement.player as usize] += 1;
            }
        }
        let board = game.board();
        let black_lost = game.captures(Color::White) as usize;
        let white_lost = game.captures(Color::Black) as usize;
        prop_assert_eq!(board.stone_count(Color::Black), placed[Color::Black as usize] - black_lost);
        prop_assert_eq!(board.stone_count(Color::White), placed[Color::White as usize] - white_lost);
    }

    #[test]
    fn check_move_predicts_attempt(points in prop::collection::vec((0..SIZE, 0..SIZE), 0..150)) {
        let mut game = new_game();
        for (x, y) in points {
            let before = game.snapshot();
            let predicted = game.check_move(x, y);
            prop_assert_eq!(game.snapshot(), before);
            let actual = game.attempt_move(x, y).map(|_| ());
            prop_assert_eq!(predicted, actual);
        }
    }
}
