//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The 8 lines whose uniform occupation by one player ends the game.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line (in [`WINNING_LINES`] order)
/// that `player` fills, `None` otherwise.
///
/// If both players own a line, which alternating play never produces, the
/// owner of the earlier line wins: rows before columns before diagonals,
/// top to bottom and left to right.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Player> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let first = board.get(a);
        match first {
            Square::Occupied(player) if board.get(b) == first && board.get(c) == first => {
                Some(player)
            }
            _ => None,
        }
    })
}

/// Returns the line `player` has completed, if any.
pub fn winning_line(board: &Board, player: Player) -> Option<[Position; 3]> {
    let mark = Square::Occupied(player);
    WINNING_LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|pos| board.get(*pos) == mark))
}
