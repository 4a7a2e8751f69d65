//! Tic-tac-toe: board model, rules, and the minimax move selector.

mod action;
pub mod minimax;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use minimax::{
    Analysis, ScoredMove, SearchError, analyze, best_move, score_moves, select_best_move,
};
pub use position::Position;
pub use rules::{WINNING_LINES, evaluate_status, is_terminal, next_player};
pub use types::{Board, BoardParseError, GameStatus, Mode, Player, Square};
