//! minimax_tictactoe - tic-tac-toe with a minimax computer opponent
//!
//! # Architecture
//!
//! - **Games**: board model, rules, and the exhaustive minimax move selector
//! - **Session**: the owned game state a front-end threads through play
//! - **Players / Orchestrator**: terminal front-end that feeds human input
//!   to the session and paces the computer's moves
//! - **Config**: TOML settings for the front-end
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{GameStatus, Mode, Player, start_game};
//!
//! # fn example() -> Result<(), minimax_tictactoe::GameError> {
//! let mut session = start_game(Mode::PlayerVsComputer);
//!
//! let outcome = session.apply_human_move(4)?;
//! assert_eq!(outcome.status, GameStatus::InProgress);
//! assert_eq!(session.current_player(), Player::O);
//!
//! let reply = session.request_computer_move()?;
//! assert_eq!(reply.mv.player, Player::O);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod orchestrator;
pub mod players;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Session management
pub use session::{GameError, GameSession, MoveOutcome, start_game};

// Crate-level exports - Front-end
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{HumanPlayer, PlayerAction};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Analysis, Board, BoardParseError, GameStatus, Mode, Move, MoveError, Player, Position,
    ScoredMove, SearchError, Square, WINNING_LINES, analyze, best_move, evaluate_status,
    is_terminal, minimax, next_player, rules, score_moves, select_best_move,
};
