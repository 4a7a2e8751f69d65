//! Game session: the state one front-end threads through a game.

use crate::games::tictactoe::{
    Board, GameStatus, Mode, Move, MoveError, Player, Position, SearchError, evaluate_status,
    next_player, select_best_move,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Error returned by session operations.
///
/// A failed operation never changes the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The move was out of range, on an occupied square, or after the game ended.
    #[display("Invalid move: {}", _0)]
    InvalidMove(MoveError),

    /// The move selector had nothing to choose from.
    #[display("{}", _0)]
    Search(SearchError),

    /// A human tried to move while the computer is to play.
    #[display("Waiting for the computer to move")]
    AwaitingComputer,

    /// The computer was asked to move on a human's turn.
    #[display("It's {}'s turn, not the computer's", _0)]
    NotComputerTurn(Player),

    /// The computer was asked to move in a mode without one.
    #[display("There is no computer opponent in {} mode", _0)]
    NoComputerOpponent(Mode),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::InvalidMove(err) => Some(err),
            GameError::Search(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        GameError::InvalidMove(err)
    }
}

impl From<SearchError> for GameError {
    fn from(err: SearchError) -> Self {
        GameError::Search(err)
    }
}

/// What a successful move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct MoveOutcome {
    /// The move that was applied.
    pub mv: Move,
    /// Game status after the move.
    pub status: GameStatus,
}

/// A single game: board, turn, status, and mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSession {
    /// The board.
    board: Board,
    /// Player to move next (the last mover once the game is over).
    current_player: Player,
    /// Game status.
    status: GameStatus,
    /// Who controls O.
    mode: Mode,
    /// Moves played so far.
    history: Vec<Move>,
}

/// Starts a new game in `mode`.
pub fn start_game(mode: Mode) -> GameSession {
    GameSession::new(mode)
}

impl GameSession {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        info!(%mode, "Starting new game");
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            mode,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Whether the next move belongs to the computer.
    pub fn is_computer_turn(&self) -> bool {
        !self.status.is_terminal() && self.mode.is_computer(self.current_player)
    }

    /// Applies a human move at `index` (0-8) for the player to move.
    ///
    /// # Errors
    ///
    /// [`GameError::AwaitingComputer`] while the computer is to play, or
    /// [`GameError::InvalidMove`] if the move breaks the rules.
    #[instrument(skip(self), fields(mode = %self.mode, player = %self.current_player))]
    pub fn apply_human_move(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        if self.is_computer_turn() {
            warn!(index, "Human tried to move on the computer's turn");
            return Err(GameError::AwaitingComputer);
        }

        self.commit(index).map_err(|err| {
            warn!(index, error = %err, "Invalid move");
            GameError::from(err)
        })
    }

    /// Lets the move selector play O's move.
    ///
    /// # Errors
    ///
    /// Fails without touching the session unless the mode has a computer
    /// opponent, the game is in progress, and O is to move.
    #[instrument(skip(self), fields(mode = %self.mode, player = %self.current_player))]
    pub fn request_computer_move(&mut self) -> Result<MoveOutcome, GameError> {
        if self.mode != Mode::PlayerVsComputer {
            return Err(GameError::NoComputerOpponent(self.mode));
        }
        if self.status.is_terminal() {
            return Err(MoveError::GameOver(self.status).into());
        }
        if !self.is_computer_turn() {
            return Err(GameError::NotComputerTurn(self.current_player));
        }

        let position = select_best_move(&self.board)?;
        Ok(self.commit(position.to_index())?)
    }

    /// Applies a move for the player to move, then evaluates and switches turn.
    fn commit(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        let player = self.current_player;
        let board = self.board.apply_move(index, player)?;
        let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;

        let mv = Move::new(player, position);
        let status = evaluate_status(&board);

        self.board = board;
        self.status = status;
        self.history.push(mv);
        if !status.is_terminal() {
            self.current_player = next_player(player);
        }

        debug!(%mv, %status, "Move applied");
        if status.is_terminal() {
            info!(%status, moves = self.history.len(), "Game over");
        }

        Ok(MoveOutcome::new(mv, status))
    }

    /// Starts over in the same mode.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    /// Starts over in `mode`.
    #[instrument(skip(self))]
    pub fn switch_mode(&mut self, mode: Mode) {
        *self = Self::new(mode);
    }

    /// One-line status for display.
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Player {}'s turn", self.current_player),
            GameStatus::Won(winner) => format!("Player {} wins!", winner),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
