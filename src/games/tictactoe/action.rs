//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::rules::evaluate_status;
use super::{Board, GameStatus, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was rejected.
///
/// Every variant is an invalid move: the board it was attempted on is
/// left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over ({})", _0)]
    GameOver(GameStatus),
}

impl std::error::Error for MoveError {}

impl Board {
    /// Places `player`'s mark at `index`, returning the resulting board.
    ///
    /// Fails if the board is already terminal, `index` is outside 0-8, or the
    /// square is occupied. `self` is never modified.
    #[instrument(skip(self), fields(board = %self))]
    pub fn apply_move(&self, index: usize, player: Player) -> Result<Board, MoveError> {
        let status = evaluate_status(self);
        if status.is_terminal() {
            return Err(MoveError::GameOver(status));
        }

        let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;

        if let Square::Occupied(_) = self.get(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        Ok(self.with_mark(position, player))
    }
}
