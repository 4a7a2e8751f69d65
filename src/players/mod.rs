//! Player trait and implementations.

mod human;

pub use human::HumanPlayer;

use crate::session::GameSession;
use anyhow::Result;

/// What a player wants to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Place the current player's mark at a board index (0-8).
    Place(usize),
    /// Start over in the same mode.
    Restart,
    /// Start over in the other mode.
    SwitchMode,
    /// Leave the game.
    Quit,
}

/// Source of human decisions.
///
/// The computer never goes through this trait; the orchestrator asks the
/// session to play its move directly.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Waits for the next action for the current session.
    async fn next_action(&mut self, session: &GameSession) -> Result<PlayerAction>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
