//! Bracket detection and disc flipping
//!
//! A bracket is a disc of the mover's colour that closes a contiguous run of
//! opponent discs starting right next to the target square. Every run that
//! is bracketed gets flipped when the move is applied.

use crate::board::{Board, Cell, Square, DIRECTIONS};

/// Find the bracketing disc for a move in one direction.
///
/// Returns the grid index of the mover's disc that closes a run of at least
/// one opponent disc, or `None` if the adjacent cell is not an opponent disc
/// or the run ends on an empty cell or the border.
///
/// # Arguments
/// * `board` - Current board state
/// * `sq` - Square the disc would be placed on
/// * `dir` - Index offset of the ray (one of `DIRECTIONS`)
/// * `colour` - Colour of the mover
pub fn find_bracket(board: &Board, sq: Square, dir: isize, colour: Cell) -> Option<usize> {
    let opponent = colour.opponent();
    let step = |idx: usize| idx.wrapping_add_signed(dir);

    let mut idx = step(sq.index());
    if board.cell(idx) != opponent {
        return None;
    }

    // The border frame is never an opponent disc, so the walk stops in-grid.
    while board.cell(idx) == opponent {
        idx = step(idx);
    }

    (board.cell(idx) == colour).then_some(idx)
}

/// Place a disc and flip every bracketed opponent run.
///
/// Legality is not checked; an illegal placement still sets the square but
/// flips nothing. Returns the number of discs flipped.
pub fn apply_move(board: &mut Board, sq: Square, colour: Cell) -> u32 {
    if !colour.is_colour() {
        return 0;
    }

    board.place(sq, colour);

    let mut flipped = 0;
    for &dir in &DIRECTIONS {
        let Some(bracket) = find_bracket(board, sq, dir, colour) else {
            continue;
        };

        let mut idx = sq.index().wrapping_add_signed(dir);
        while idx != bracket {
            if let Some(between) = Square::from_index(idx) {
                board.place(between, colour);
                flipped += 1;
            }
            idx = idx.wrapping_add_signed(dir);
        }
    }
    flipped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_from_start_position() {
        let board = Board::new();
        // Black at (2,3) looks down through white (3,3) to black (4,3)
        let bracket = find_bracket(&board, Square::new(2, 3), 10, Cell::Black);
        assert_eq!(bracket, Some(Square::new(4, 3).index()));

        // No opponent disc adjacent going up
        assert_eq!(find_bracket(&board, Square::new(2, 3), -10, Cell::Black), None);
    }

    #[test]
    fn test_bracket_stops_at_border() {
        let mut board = Board::empty();
        // B W W | border: run reaches the frame before any black disc
        board.place(Square::new(0, 5), Cell::Black);
        board.place(Square::new(0, 6), Cell::White);
        board.place(Square::new(0, 7), Cell::White);

        assert_eq!(find_bracket(&board, Square::new(0, 5), 1, Cell::Black), None);
    }

    #[test]
    fn test_bracket_stops_at_empty() {
        let mut board = Board::empty();
        board.place(Square::new(4, 1), Cell::White);
        board.place(Square::new(4, 2), Cell::White);
        board.place(Square::new(4, 4), Cell::Black);

        assert_eq!(find_bracket(&board, Square::new(4, 0), 1, Cell::Black), None);
    }

    #[test]
    fn test_apply_flips_multiple_directions() {
        let mut board = Board::empty();
        // Black plays (4,4); whites at (4,3) and (3,3) bracketed by (4,2), (2,2)
        board.place(Square::new(4, 3), Cell::White);
        board.place(Square::new(4, 2), Cell::Black);
        board.place(Square::new(3, 3), Cell::White);
        board.place(Square::new(2, 2), Cell::Black);
        // Unbracketed white to the right stays put
        board.place(Square::new(4, 5), Cell::White);

        let flipped = apply_move(&mut board, Square::new(4, 4), Cell::Black);

        assert_eq!(flipped, 2);
        assert_eq!(board.get(Square::new(4, 4)), Cell::Black);
        assert_eq!(board.get(Square::new(4, 3)), Cell::Black);
        assert_eq!(board.get(Square::new(3, 3)), Cell::Black);
        assert_eq!(board.get(Square::new(4, 5)), Cell::White);
    }

    #[test]
    fn test_apply_flips_long_run() {
        let mut board = Board::empty();
        for col in 1..7 {
            board.place(Square::new(7, col), Cell::White);
        }
        board.place(Square::new(7, 7), Cell::Black);

        let flipped = apply_move(&mut board, Square::new(7, 0), Cell::Black);

        assert_eq!(flipped, 6);
        assert_eq!(board.count(Cell::Black), 8);
        assert_eq!(board.count(Cell::White), 0);
    }

    #[test]
    fn test_apply_ignores_non_colour() {
        let mut board = Board::new();
        let before = board;
        assert_eq!(apply_move(&mut board, Square::new(2, 3), Cell::Empty), 0);
        assert_eq!(board, before);
    }
}
