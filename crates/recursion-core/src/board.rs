use crate::error::{BoardError, BoardResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side length of the board
pub const BOARD_SIZE: usize = 5;

/// Number of tiles on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A tile coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index in `0..CELL_COUNT`
    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// In-bounds orthogonal neighbours, in the order up, down, left, right
    pub fn neighbors(&self) -> impl Iterator<Item = Position> {
        let Position { row, col } = *self;
        [
            (row > 0).then(|| Position::new(row - 1, col)),
            (row + 1 < BOARD_SIZE).then(|| Position::new(row + 1, col)),
            (col > 0).then(|| Position::new(row, col - 1)),
            (col + 1 < BOARD_SIZE).then(|| Position::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }

    /// True when the two positions differ by one step in exactly one axis
    pub fn is_adjacent(&self, other: Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A fixed 5x5 board of letters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[char; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new(cells: [[char; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Build a board from 25 whitespace-separated letters in row-major order.
    ///
    /// Line breaks are not significant; the letters are grouped into rows of
    /// five after splitting.
    pub fn parse(text: &str) -> BoardResult<Self> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != CELL_COUNT {
            return Err(BoardError::Shape {
                found: tokens.len(),
            });
        }

        let mut cells = [[' '; BOARD_SIZE]; BOARD_SIZE];
        for (index, token) in tokens.iter().enumerate() {
            let mut chars = token.chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(letter), None) => letter,
                _ => {
                    return Err(BoardError::InvalidToken {
                        index,
                        token: token.to_string(),
                    })
                }
            };
            cells[index / BOARD_SIZE][index % BOARD_SIZE] = letter;
        }

        Ok(Self { cells })
    }

    pub fn get(&self, pos: Position) -> char {
        self.cells[pos.row][pos.col]
    }

    pub fn row(&self, row: usize) -> &[char; BOARD_SIZE] {
        &self.cells[row]
    }

    /// All positions, top-left to bottom-right
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
