//! Game orchestration between a human and the session.
//!
//! The orchestrator is the front-end collaborator of the game core: it asks
//! the human for input, applies it, and on the computer's turn waits the
//! configured thinking delay before asking the session for the computer's
//! move. The delay lives here, outside the core, and never affects which
//! move is chosen.

use crate::games::tictactoe::rules::winning_line;
use crate::games::tictactoe::{GameStatus, Mode, Player as Mark, Position};
use crate::players::{Player, PlayerAction};
use crate::session::{GameSession, MoveOutcome};
use anyhow::Result;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Board or status changed.
    StateChanged {
        /// Rendered board.
        board: String,
        /// Status line, e.g. "Player X's turn".
        message: String,
    },
    /// The computer is about to move.
    ComputerThinking,
    /// A move was applied.
    MoveMade {
        /// Who moved.
        player: Mark,
        /// Where.
        position: Position,
    },
    /// Input was rejected; the game is unchanged.
    MoveRejected {
        /// Why.
        reason: String,
    },
    /// The mode changed and a new game started.
    ModeChanged(Mode),
    /// Game ended.
    GameOver {
        /// Final status.
        status: GameStatus,
        /// Status line, e.g. "Player O wins!".
        message: String,
        /// The completed line, `None` for a draw.
        line: Option<[Position; 3]>,
    },
}

/// Drives one session until the human quits.
pub struct Orchestrator {
    session: GameSession,
    input: Box<dyn Player>,
    thinking_delay: Duration,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        session: GameSession,
        input: Box<dyn Player>,
        thinking_delay: Duration,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session,
            input,
            thinking_delay,
            event_tx,
        }
    }

    /// Returns the session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Runs the game loop until the player quits or input ends.
    #[instrument(skip(self), fields(mode = %self.session.mode(), input = %self.input.name()))]
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting game orchestration");
        self.publish_state()?;

        loop {
            if self.session.is_computer_turn() {
                self.play_computer().await?;
                continue;
            }

            let action = self.input.next_action(&self.session).await?;
            debug!(?action, "Received action");

            match action {
                PlayerAction::Place(index) => match self.session.apply_human_move(index) {
                    Ok(outcome) => self.publish_move(outcome)?,
                    Err(err) => self.event_tx.send(GameEvent::MoveRejected {
                        reason: err.to_string(),
                    })?,
                },
                PlayerAction::Restart => {
                    self.session.reset();
                    self.publish_state()?;
                }
                PlayerAction::SwitchMode => {
                    let mode = self.session.mode().toggled();
                    self.session.switch_mode(mode);
                    self.event_tx.send(GameEvent::ModeChanged(mode))?;
                    self.publish_state()?;
                }
                PlayerAction::Quit => {
                    info!(status = %self.session.status(), "Player quit");
                    return Ok(());
                }
            }
        }
    }

    /// Waits the thinking delay, then lets the session play O.
    async fn play_computer(&mut self) -> Result<()> {
        self.event_tx.send(GameEvent::ComputerThinking)?;
        tokio::time::sleep(self.thinking_delay).await;

        let outcome = self.session.request_computer_move()?;
        self.publish_move(outcome)
    }

    fn publish_move(&self, outcome: MoveOutcome) -> Result<()> {
        let MoveOutcome { mv, status } = outcome;
        self.event_tx.send(GameEvent::MoveMade {
            player: mv.player,
            position: mv.position,
        })?;
        self.publish_state()?;

        if status.is_terminal() {
            let line = match status {
                GameStatus::Won(winner) => winning_line(self.session.board(), winner),
                _ => None,
            };
            self.event_tx.send(GameEvent::GameOver {
                status,
                message: self.session.status_message(),
                line,
            })?;
        }
        Ok(())
    }

    fn publish_state(&self) -> Result<()> {
        self.event_tx.send(GameEvent::StateChanged {
            board: self.session.board().display(),
            message: self.session.status_message(),
        })?;
        Ok(())
    }
}
