//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second, the computer in computer mode).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Board symbol for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// The board is `Copy`, so exploratory positions are always scratch copies
/// and never alias the board held by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position without any rule checks.
    ///
    /// Use [`Board::apply_move`] for validated play.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut next = *self;
        next.set(pos, Square::Occupied(player));
        next
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Free squares show their 1-based number so a human knows what to type.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => char::from(b'1' + pos as u8),
                    Square::Occupied(player) => player.symbol(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact single-line form: `X`, `O`, `_` for empty, rows joined by `/`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, square) in self.squares.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                write!(f, "/")?;
            }
            let c = match square {
                Square::Empty => '_',
                Square::Occupied(player) => player.symbol(),
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty marker, nor a separator.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidCharacter(char),

    /// The text did not describe exactly nine cells.
    #[display("Board must have 9 cells, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}

/// Parses `X`/`O` marks and `_`, `.` or `-` for empty squares.
///
/// Whitespace, `|`, `/` and `,` are separators and ignored, so both
/// `"XX_ _O_ ___"` and `"XX_/_O_/___"` are accepted.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '_' | '.' | '-' => Square::Empty,
                c if c.is_whitespace() || matches!(c, '|' | '/' | ',') => continue,
                other => return Err(BoardParseError::InvalidCharacter(other)),
            };
            cells.push(square);
        }

        let squares: [Square; 9] = cells
            .try_into()
            .map_err(|cells: Vec<Square>| BoardParseError::WrongLength(cells.len()))?;
        Ok(Self { squares })
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("in progress")]
    InProgress,
    /// Game ended in a win.
    #[display("won by {}", _0)]
    Won(Player),
    /// Game ended in a draw.
    #[display("draw")]
    Draw,
}

impl GameStatus {
    /// Whether no further moves are legal.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Who controls the two marks.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    #[serde(rename = "player", alias = "pvp")]
    #[strum(to_string = "player", serialize = "pvp")]
    PlayerVsPlayer,
    /// A human plays X against the computer as O.
    #[serde(rename = "computer", alias = "pvc")]
    #[strum(to_string = "computer", serialize = "pvc")]
    PlayerVsComputer,
}

impl Mode {
    /// Whether `player` is driven by the move selector in this mode.
    pub fn is_computer(self, player: Player) -> bool {
        self == Mode::PlayerVsComputer && player == Player::O
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Mode::PlayerVsPlayer => Mode::PlayerVsComputer,
            Mode::PlayerVsComputer => Mode::PlayerVsPlayer,
        }
    }
}
