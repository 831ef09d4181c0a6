//! Board structure on a bordered 10x10 grid

use std::fmt;

use super::{Cell, Square, BOARD_SIZE, GRID_SIZE, INTERIOR_CELLS};

/// Game board. `Copy`, so every search frame owns a private snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; GRID_SIZE],
}

impl Board {
    /// Standard starting position: white on (3,3) and (4,4), black on
    /// (3,4) and (4,3).
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.place(Square::new(3, 3), Cell::White);
        board.place(Square::new(3, 4), Cell::Black);
        board.place(Square::new(4, 3), Cell::Black);
        board.place(Square::new(4, 4), Cell::White);
        board
    }

    /// Border frame with an empty interior
    pub fn empty() -> Self {
        let mut cells = [Cell::Border; GRID_SIZE];
        for sq in Square::all() {
            cells[sq.index()] = Cell::Empty;
        }
        Self { cells }
    }

    /// Get cell at an interior square
    #[inline]
    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.index()]
    }

    /// Get cell at a raw grid index (border included)
    #[inline]
    pub fn cell(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq) == Cell::Empty
    }

    /// Set a square without flipping anything.
    /// Use `rules::apply_move` for game moves.
    ///
    /// Only interior squares are addressable, so the border never changes.
    #[inline]
    pub fn place(&mut self, sq: Square, cell: Cell) {
        debug_assert!(cell != Cell::Border);
        self.cells[sq.index()] = cell;
    }

    /// Number of discs of one colour
    pub fn count(&self, colour: Cell) -> u32 {
        Square::all().filter(|&sq| self.get(sq) == colour).count() as u32
    }

    /// Total discs on the board
    pub fn disc_count(&self) -> u32 {
        INTERIOR_CELLS - self.count(Cell::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 1..=BOARD_SIZE {
            write!(f, " {col}")?;
        }
        writeln!(f)?;

        for row in 0..BOARD_SIZE as u8 {
            write!(f, "{} ", row + 1)?;
            for col in 0..BOARD_SIZE as u8 {
                write!(f, " {}", self.get(Square::new(row, col)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
