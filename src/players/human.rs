//! Human player reading moves from line-based input.

use super::{Player, PlayerAction};
use crate::games::tictactoe::Position;
use crate::session::GameSession;
use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, instrument, warn};

/// Human player typing commands, one per line.
///
/// Accepted input: `1`-`9` or a position label (`center`, `top-left`) to
/// place a mark, `r` to restart, `m` to switch mode, `q` to quit.
pub struct HumanPlayer<R> {
    name: String,
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin + Send> HumanPlayer<R> {
    /// Creates a new human player reading from `input`.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            lines: input.lines(),
        }
    }
}

/// Parses one line of input, `None` if it means nothing.
#[instrument]
pub fn parse_action(line: &str) -> Option<PlayerAction> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => None,
        "q" | "quit" => Some(PlayerAction::Quit),
        "r" | "reset" | "restart" => Some(PlayerAction::Restart),
        "m" | "mode" => Some(PlayerAction::SwitchMode),
        other => match other.parse::<usize>() {
            Ok(number) => number.checked_sub(1).map(PlayerAction::Place),
            Err(_) => Position::from_label(other).map(|pos| PlayerAction::Place(pos.to_index())),
        },
    }
}

#[async_trait::async_trait]
impl<R: AsyncBufRead + Unpin + Send> Player for HumanPlayer<R> {
    async fn next_action(&mut self, session: &GameSession) -> Result<PlayerAction> {
        debug!(player = %self.name, to_move = %session.current_player(), "Waiting for input");

        while let Some(line) = self
            .lines
            .next_line()
            .await
            .context("Failed to read player input")?
        {
            match parse_action(&line) {
                Some(action) => return Ok(action),
                None => warn!(input = %line.trim(), "Unrecognized input"),
            }
        }

        // End of input behaves like quitting.
        Ok(PlayerAction::Quit)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
