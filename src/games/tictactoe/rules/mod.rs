//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the session and the move selector share one source of truth.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, check_winner, winning_line};

use super::{Board, GameStatus, Player};
use tracing::instrument;

/// Classifies a board as won, drawn, or still in progress.
///
/// A completed line takes precedence over a full board, so a last move
/// that both fills the board and completes a line is a win.
#[instrument(level = "trace")]
pub fn evaluate_status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// The player who moves after `current`.
pub fn next_player(current: Player) -> Player {
    current.opponent()
}

/// Whether a status ends the game.
pub fn is_terminal(status: GameStatus) -> bool {
    status.is_terminal()
}
