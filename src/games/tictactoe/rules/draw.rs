//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position, Square};
    use super::super::evaluate_status;
    use super::*;
    use crate::games::tictactoe::GameStatus;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(evaluate_status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        // X wins the last move on the main diagonal with the board full.
        let board: Board = "XOX/OXO/OXX".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(evaluate_status(&board), GameStatus::Won(Player::X));
    }
}
