//! minimax_tictactoe - terminal front-end
//!
//! Plays tic-tac-toe on stdin/stdout, or analyzes a board for O.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use minimax_tictactoe::{
    Analysis, Board, GameConfig, GameEvent, HumanPlayer, Mode, Orchestrator, Player, analyze,
    start_game,
};
use serde::Serialize;
use std::path::PathBuf;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            config,
            delay_ms,
        } => run_play(mode, config, delay_ms).await,
        Command::Analyze { board, json } => run_analyze(&board, json),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive game
async fn run_play(
    mode: Option<Mode>,
    config: Option<PathBuf>,
    delay_ms: Option<u64>,
) -> Result<()> {
    let mut game_config = match config {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(mode) = mode {
        game_config = game_config.with_mode(mode);
    }
    if let Some(millis) = delay_ms {
        game_config = game_config.with_thinking_delay_ms(millis);
    }

    init_tracing(game_config.log_filter());
    info!(?game_config, "Starting interactive game");

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(render_events(event_rx, game_config.clone()));

    let input = HumanPlayer::new("Terminal", BufReader::new(tokio::io::stdin()));
    let mut orchestrator = Orchestrator::new(
        start_game(*game_config.mode()),
        Box::new(input),
        game_config.thinking_delay(),
        event_tx,
    );

    let result = orchestrator.run().await;
    // Dropping the orchestrator closes the channel so the renderer finishes.
    drop(orchestrator);
    renderer.await.context("Renderer task failed")?;
    result
}

/// Prints game events for a human at the terminal.
async fn render_events(mut event_rx: mpsc::UnboundedReceiver<GameEvent>, config: GameConfig) {
    let name = |player: Player| match player {
        Player::X => config.player_x_name().as_str(),
        Player::O => config.player_o_name().as_str(),
    };

    while let Some(event) = event_rx.recv().await {
        match event {
            GameEvent::StateChanged { board, message } => {
                println!("\n{}\n\n{}", board, message);
                println!("Enter 1-9 to move, r to restart, m to switch mode, q to quit");
            }
            GameEvent::ComputerThinking => println!("{} is thinking...", name(Player::O)),
            GameEvent::MoveMade { player, position } => {
                println!("{} played {}", name(player), position)
            }
            GameEvent::MoveRejected { reason } => println!("{}", reason),
            GameEvent::ModeChanged(mode) => println!("Switched to {} mode", mode),
            GameEvent::GameOver { message, line, .. } => match line {
                Some([a, b, c]) => println!("Game over: {} ({}, {}, {})", message, a, b, c),
                None => println!("Game over: {}", message),
            },
        }
    }
}

/// JSON form of the `analyze` command's output.
#[derive(Debug, Serialize)]
struct Report<'a> {
    board: String,
    #[serde(flatten)]
    analysis: &'a Analysis,
}

/// Score every move for O on a board
#[instrument]
fn run_analyze(board: &str, json: bool) -> Result<()> {
    init_tracing("warn");

    let board: Board = board.parse().context("Invalid board")?;
    let analysis = analyze(&board).context("Cannot analyze board")?;

    if json {
        let report = Report {
            board: board.to_string(),
            analysis: &analysis,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}\n", board.display());
        for m in &analysis.moves {
            let number = m.position.to_index() + 1;
            println!("{:>2}  {:<14} {:+}", number, m.position.label(), m.score);
        }
        let best = analysis.best.position;
        println!("\nBest move for O: {} ({})", best.to_index() + 1, best);
    }
    Ok(())
}
