//! Tests for the game session API.

use minimax_tictactoe::{
    GameError, GameSession, GameStatus, Mode, Move, MoveError, Player, Position, Square,
    start_game,
};

#[test]
fn test_start_game() {
    let session = start_game(Mode::PlayerVsComputer);
    assert_eq!(session.board(), &minimax_tictactoe::Board::new());
    assert_eq!(session.current_player(), Player::X);
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.mode(), Mode::PlayerVsComputer);
    assert!(session.history().is_empty());
}

#[test]
fn test_center_opening_switches_turn() {
    let mut session = start_game(Mode::PlayerVsPlayer);
    let outcome = session.apply_human_move(4).unwrap();

    assert_eq!(outcome.status, GameStatus::InProgress);
    assert_eq!(outcome.mv, Move::new(Player::X, Position::Center));
    assert_eq!(session.current_player(), Player::O);
    assert_eq!(session.status_message(), "Player O's turn");
}

#[test]
fn test_rejected_move_leaves_session_unchanged() {
    let mut session = start_game(Mode::PlayerVsPlayer);
    session.apply_human_move(0).unwrap();
    let before = session.clone();

    assert_eq!(
        session.apply_human_move(0),
        Err(GameError::InvalidMove(MoveError::SquareOccupied(Position::TopLeft)))
    );
    assert_eq!(
        session.apply_human_move(42),
        Err(GameError::InvalidMove(MoveError::OutOfRange(42)))
    );
    assert_eq!(session, before);
}

#[test]
fn test_player_vs_player_win() {
    let mut session = start_game(Mode::PlayerVsPlayer);
    for index in [0, 3, 1, 4] {
        session.apply_human_move(index).unwrap();
    }
    let outcome = session.apply_human_move(2).unwrap();

    assert_eq!(outcome.status, GameStatus::Won(Player::X));
    assert_eq!(session.status_message(), "Player X wins!");
    assert_eq!(session.history().len(), 5);

    // Terminal: nothing more may be played, and the session stays put.
    let before = session.clone();
    assert_eq!(
        session.apply_human_move(5),
        Err(GameError::InvalidMove(MoveError::GameOver(GameStatus::Won(Player::X))))
    );
    assert_eq!(session, before);
}

#[test]
fn test_player_vs_player_draw() {
    let mut session = start_game(Mode::PlayerVsPlayer);
    // X O X / X O O / O X X
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        session.apply_human_move(index).unwrap();
    }
    assert_eq!(session.status(), GameStatus::Draw);
    assert_eq!(session.status_message(), "It's a draw!");
}

#[test]
fn test_computer_blocks() {
    let mut session = start_game(Mode::PlayerVsComputer);
    session.apply_human_move(0).unwrap();
    let reply = session.request_computer_move().unwrap();
    assert_eq!(reply.mv, Move::new(Player::O, Position::Center));

    session.apply_human_move(1).unwrap();
    let reply = session.request_computer_move().unwrap();
    assert_eq!(reply.mv.position, Position::TopRight);
    assert_eq!(session.board().get(Position::TopRight), Square::Occupied(Player::O));
    assert_eq!(session.current_player(), Player::X);
}

#[test]
fn test_human_cannot_move_for_computer() {
    let mut session = start_game(Mode::PlayerVsComputer);
    session.apply_human_move(4).unwrap();
    let before = session.clone();

    assert!(session.is_computer_turn());
    assert_eq!(session.apply_human_move(0), Err(GameError::AwaitingComputer));
    assert_eq!(session, before);
}

#[test]
fn test_computer_move_guards() {
    let mut pvp = start_game(Mode::PlayerVsPlayer);
    assert_eq!(
        pvp.request_computer_move(),
        Err(GameError::NoComputerOpponent(Mode::PlayerVsPlayer))
    );

    let mut pvc = start_game(Mode::PlayerVsComputer);
    assert_eq!(
        pvc.request_computer_move(),
        Err(GameError::NotComputerTurn(Player::X))
    );
    assert!(pvc.history().is_empty());
}

#[test]
fn test_computer_game_never_lost_by_o() {
    // X plays the first free square each turn.
    let mut session = start_game(Mode::PlayerVsComputer);
    while !session.status().is_terminal() {
        let index = session.board().empty_positions().next().unwrap().to_index();
        session.apply_human_move(index).unwrap();
        if session.is_computer_turn() {
            session.request_computer_move().unwrap();
        }
    }
    assert_ne!(session.status(), GameStatus::Won(Player::X));

    let before = session.clone();
    assert_eq!(
        session.request_computer_move(),
        Err(GameError::InvalidMove(MoveError::GameOver(session.status())))
    );
    assert_eq!(session, before);
}

#[test]
fn test_reset_and_switch_mode() {
    let mut session = start_game(Mode::PlayerVsComputer);
    session.apply_human_move(4).unwrap();

    session.reset();
    assert_eq!(session, GameSession::new(Mode::PlayerVsComputer));

    session.apply_human_move(4).unwrap();
    session.switch_mode(Mode::PlayerVsPlayer);
    assert_eq!(session.mode(), Mode::PlayerVsPlayer);
    assert!(session.history().is_empty());
    assert_eq!(session.status_message(), "Player X's turn");
}

#[test]
fn test_mode_parsing() {
    assert_eq!("computer".parse::<Mode>().unwrap(), Mode::PlayerVsComputer);
    assert_eq!("PVC".parse::<Mode>().unwrap(), Mode::PlayerVsComputer);
    assert_eq!("player".parse::<Mode>().unwrap(), Mode::PlayerVsPlayer);
    assert_eq!(Mode::PlayerVsComputer.to_string(), "computer");
    assert!("robot".parse::<Mode>().is_err());
}
