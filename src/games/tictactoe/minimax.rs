//! Exhaustive minimax move selection for the computer player (O).
//!
//! Every call searches the full game tree below the given board. Leaves are
//! scored from O's point of view: a win for O is `+1`, a win for X is `-1`,
//! a draw is `0`. Non-terminal positions are never scored heuristically.
//!
//! Each exploratory move is made on a fresh copy of the board, so the board
//! passed in is never touched.

use super::rules::evaluate_status;
use super::{Board, GameStatus, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Minimax value of a position, from O's point of view.
pub type Score = i8;

/// Value of a position O has won.
pub const O_WINS: Score = 1;
/// Value of a position X has won.
pub const X_WINS: Score = -1;
/// Value of a drawn position.
pub const DRAW: Score = 0;

/// A root candidate for O together with its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Where O would play.
    pub position: Position,
    /// Value of the resulting position with X to move.
    pub score: Score,
}

/// The selector was asked for a move on a board that has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The board is already won or drawn.
    #[display("No legal move: game is {}", _0)]
    NoLegalMove(GameStatus),

    /// The mark counts show it is not O's turn (X must lead by exactly one).
    #[display("Not O's turn: board has {} X and {} O", x, o)]
    NotOsTurn {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
}

impl std::error::Error for SearchError {}

/// Leaf value of a terminal status, `None` while the game is in progress.
pub fn terminal_score(status: GameStatus) -> Option<Score> {
    match status {
        GameStatus::Won(Player::O) => Some(O_WINS),
        GameStatus::Won(Player::X) => Some(X_WINS),
        GameStatus::Draw => Some(DRAW),
        GameStatus::InProgress => None,
    }
}

/// Search state confined to a single selector call.
#[derive(Debug, Default)]
struct Search {
    nodes: u64,
}

impl Search {
    /// Minimax value of `board` with `to_move` placing the next mark.
    fn minimax(&mut self, board: &Board, to_move: Player) -> Score {
        self.nodes += 1;

        if let Some(score) = terminal_score(evaluate_status(board)) {
            return score;
        }

        let scores = board
            .empty_positions()
            .map(|pos| self.minimax(&board.with_mark(pos, to_move), to_move.opponent()));

        // A non-terminal board always has an empty square.
        let best = match to_move {
            Player::O => scores.max(),
            Player::X => scores.min(),
        };
        best.unwrap_or(DRAW)
    }
}

/// Scores every legal move for O, in ascending position order.
///
/// # Errors
///
/// Returns [`SearchError::NoLegalMove`] if the board is already won or drawn.
#[instrument(skip(board), fields(board = %board))]
pub fn score_moves(board: &Board) -> Result<Vec<ScoredMove>, SearchError> {
    let status = evaluate_status(board);
    if status.is_terminal() {
        return Err(SearchError::NoLegalMove(status));
    }

    let mut search = Search::default();
    let scored = board
        .empty_positions()
        .map(|position| ScoredMove {
            position,
            score: search.minimax(&board.with_mark(position, Player::O), Player::X),
        })
        .collect::<Vec<_>>();

    debug!(nodes = search.nodes, candidates = scored.len(), "Search complete");
    Ok(scored)
}

/// Picks O's best move on `board`.
///
/// Ties go to the lowest index: a later candidate replaces the current best
/// only with a strictly greater score.
///
/// # Errors
///
/// Returns [`SearchError::NoLegalMove`] if the board is already won or drawn.
#[instrument(skip(board), fields(board = %board))]
pub fn select_best_move(board: &Board) -> Result<Position, SearchError> {
    let scored = score_moves(board)?;
    let best = best_move(&scored).ok_or(SearchError::NoLegalMove(evaluate_status(board)))?;
    debug!(position = %best.position, score = best.score, "Selected move");
    Ok(best.position)
}

/// First candidate with the greatest score, scanning in list order.
pub fn best_move(scored: &[ScoredMove]) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;
    for candidate in scored {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(*candidate);
        }
    }
    best
}

/// Every candidate for O plus the one the selector would play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Candidates in ascending position order.
    pub moves: Vec<ScoredMove>,
    /// The selected candidate.
    pub best: ScoredMove,
}

/// Scores a board on which O is to move in a real game.
///
/// # Errors
///
/// [`SearchError::NotOsTurn`] unless X has exactly one more mark than O,
/// or [`SearchError::NoLegalMove`] if the board is already won or drawn.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board) -> Result<Analysis, SearchError> {
    let (x, o) = (board.count(Player::X), board.count(Player::O));
    if x != o + 1 {
        return Err(SearchError::NotOsTurn { x, o });
    }

    let moves = score_moves(board)?;
    let best = best_move(&moves).ok_or(SearchError::NoLegalMove(evaluate_status(board)))?;
    Ok(Analysis { moves, best })
}
