//! Board representation for Othello
//!
//! The board is a 10x10 grid: an 8x8 playing interior wrapped in a one-cell
//! border frame. Grid index `i` maps to the 0-based interior coordinate
//! `(i / 10 - 1, i % 10 - 1)`, so direction offsets are plain index deltas and
//! ray walks stop at the frame without bounds checks.

pub mod board;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::MoveParseError;

// Re-exports
pub use board::Board;

/// Interior side length (8x8)
pub const BOARD_SIZE: usize = 8;
/// Grid length including the border frame (10x10)
pub const GRID_SIZE: usize = 100;
/// Playable cells
pub const INTERIOR_CELLS: u32 = 64;

/// Index offsets for the eight ray directions.
pub const DIRECTIONS: [isize; 8] = [-11, -10, -9, -1, 1, 9, 10, 11];

/// The four interior corners: (0,0), (0,7), (7,0), (7,7)
pub const CORNERS: [Square; 4] = [Square(11), Square(18), Square(81), Square(88)];

/// State of one grid cell. `Black` and `White` double as player colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
    Border,
}

impl Cell {
    /// Get opponent colour.
    ///
    /// Anything other than `Black`/`White` is a usage error: it is logged and
    /// `Empty` comes back, for which no move is ever legal.
    #[inline]
    pub fn opponent(self) -> Cell {
        match self {
            Cell::Black => Cell::White,
            Cell::White => Cell::Black,
            other => {
                warn!(cell = ?other, "illegal player");
                Cell::Empty
            }
        }
    }

    /// True for the two player colours.
    #[inline]
    pub fn is_colour(self) -> bool {
        matches!(self, Cell::Black | Cell::White)
    }

    /// Single-character rendering used by the board printer
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'b',
            Cell::White => 'w',
            Cell::Border => '?',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cell::Empty => "empty",
            Cell::Black => "black",
            Cell::White => "white",
            Cell::Border => "border",
        };
        f.write_str(name)
    }
}

/// An interior square, stored as its grid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Square from a 0-based interior coordinate.
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE);
        Self(10 * (row + 1) + col + 1)
    }

    /// Square from a grid index; `None` for border or out-of-range indices.
    #[inline]
    pub fn from_index(idx: usize) -> Option<Self> {
        Self::is_interior(idx).then_some(Self(idx as u8))
    }

    #[inline]
    pub fn is_interior(idx: usize) -> bool {
        (11..=88).contains(&idx) && (1..=8).contains(&(idx % 10))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// 0-based row
    #[inline]
    pub fn row(self) -> u8 {
        self.0 / 10 - 1
    }

    /// 0-based column
    #[inline]
    pub fn col(self) -> u8 {
        self.0 % 10 - 1
    }

    #[inline]
    pub fn is_corner(self) -> bool {
        CORNERS.contains(&self)
    }

    /// All 64 interior squares in scan order.
    pub fn all() -> impl Iterator<Item = Square> {
        (11..=88usize).filter_map(Square::from_index)
    }
}

/// A move: a disc placed on an interior square, or a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Place(Square),
    Pass,
}

impl Move {
    /// Referee wire form: two digits (row, col) or `pass`, newline terminated.
    pub fn to_wire(self) -> String {
        format!("{self}\n")
    }

    pub fn square(self) -> Option<Square> {
        match self {
            Move::Place(sq) => Some(sq),
            Move::Pass => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(sq) => write!(f, "{}{}", sq.row(), sq.col()),
            Move::Pass => f.write_str("pass"),
        }
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_end_matches(['\r', '\n']);
        if s == "pass" {
            return Ok(Move::Pass);
        }

        match s.as_bytes() {
            [r @ b'0'..=b'7', c @ b'0'..=b'7'] => {
                Ok(Move::Place(Square::new(*r - b'0', *c - b'0')))
            }
            _ => Err(MoveParseError(s.to_string())),
        }
    }
}
