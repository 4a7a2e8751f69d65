//! Tests for the minimax move selector.

use minimax_tictactoe::minimax::{DRAW, O_WINS, X_WINS};
use minimax_tictactoe::{
    Board, GameStatus, Player, Position, SearchError, evaluate_status, score_moves,
    select_best_move,
};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn test_blocks_threatened_line() {
    let b = board("XX_/_O_/___");
    assert_eq!(select_best_move(&b), Ok(Position::TopRight));
}

#[test]
fn test_equal_winning_moves_pick_lowest_index() {
    // O completes a line at 5, 6 or 8.
    let b = board("OXX/OO_/_X_");
    let scored = score_moves(&b).unwrap();
    let positions: Vec<_> = scored.iter().map(|m| m.position).collect();
    assert_eq!(
        positions,
        vec![Position::MiddleRight, Position::BottomLeft, Position::BottomRight]
    );
    assert!(scored.iter().all(|m| m.score == O_WINS));
    assert_eq!(select_best_move(&b), Ok(Position::MiddleRight));
}

#[test]
fn test_selected_move_has_the_best_score() {
    for b in ["X__/___/___", "_X_/___/___", "___/_X_/___", "X__/_O_/__X", "XO_/_X_/___"] {
        let b = board(b);
        let scored = score_moves(&b).unwrap();
        let best = scored.iter().map(|m| m.score).max().unwrap();
        let first_best = scored.iter().find(|m| m.score == best).unwrap().position;
        assert_eq!(select_best_move(&b), Ok(first_best));
    }
}

#[test]
fn test_every_opening_is_a_draw_with_best_play() {
    for opening in 0..9 {
        let b = Board::new().apply_move(opening, Player::X).unwrap();
        let best = score_moves(&b).unwrap().iter().map(|m| m.score).max().unwrap();
        assert_eq!(best, DRAW, "opening {opening}");
    }
}

#[test]
fn test_lost_position_still_returns_a_move() {
    // X has two open lines; O can block only one.
    let b = board("X_X/_O_/X__");
    let scored = score_moves(&b).unwrap();
    assert!(scored.iter().all(|m| m.score == X_WINS));
    assert_eq!(select_best_move(&b), Ok(Position::TopCenter));
}

#[test]
fn test_no_legal_move_on_terminal_boards() {
    assert_eq!(
        select_best_move(&board("XOX/XOO/OXX")),
        Err(SearchError::NoLegalMove(GameStatus::Draw))
    );
    assert_eq!(
        score_moves(&board("OOO/XX_/X__")),
        Err(SearchError::NoLegalMove(GameStatus::Won(Player::O)))
    );
}

#[test]
fn test_search_does_not_mutate_input() {
    let b = board("X__/___/__O");
    let before = b;
    let _ = score_moves(&b).unwrap();
    let _ = select_best_move(&b).unwrap();
    assert_eq!(b, before);
}

/// Plays every possible X line against the selector; returns games played.
fn play_all_x_lines(b: Board) -> usize {
    let mut games = 0;
    for x_move in b.empty_positions() {
        let after_x = b.apply_move(x_move.to_index(), Player::X).unwrap();
        match evaluate_status(&after_x) {
            GameStatus::Won(Player::X) => panic!("X won after {after_x}"),
            GameStatus::InProgress => {}
            _ => {
                games += 1;
                continue;
            }
        }

        let reply = select_best_move(&after_x).unwrap();
        let after_o = after_x.apply_move(reply.to_index(), Player::O).unwrap();
        if evaluate_status(&after_o).is_terminal() {
            games += 1;
        } else {
            games += play_all_x_lines(after_o);
        }
    }
    games
}

#[test]
fn test_selector_never_loses_as_o() {
    let games = play_all_x_lines(Board::new());
    assert!(games > 0);
}
