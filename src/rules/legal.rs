//! Legal move detection and enumeration

use crate::board::{Board, Cell, Square, DIRECTIONS};

use super::flips::find_bracket;

/// Check whether `colour` may place a disc on `sq`.
///
/// A move is legal when the square is empty and at least one direction
/// brackets a run of opponent discs.
#[inline]
pub fn is_legal(board: &Board, sq: Square, colour: Cell) -> bool {
    colour.is_colour()
        && board.is_empty(sq)
        && DIRECTIONS
            .iter()
            .any(|&dir| find_bracket(board, sq, dir, colour).is_some())
}

/// All legal moves for `colour`, in scan order (row-major over the interior).
pub fn legal_moves(board: &Board, colour: Cell) -> Vec<Square> {
    if !colour.is_colour() {
        return Vec::new();
    }
    Square::all().filter(|&sq| is_legal(board, sq, colour)).collect()
}

/// Number of legal moves for `colour` (mobility / branching factor).
pub fn count_legal_moves(board: &Board, colour: Cell) -> usize {
    if !colour.is_colour() {
        return 0;
    }
    Square::all().filter(|&sq| is_legal(board, sq, colour)).count()
}

#[inline]
pub fn has_legal_move(board: &Board, colour: Cell) -> bool {
    colour.is_colour() && Square::all().any(|sq| is_legal(board, sq, colour))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::apply_move;

    #[test]
    fn test_initial_black_moves() {
        let board = Board::new();
        let moves = legal_moves(&board, Cell::Black);
        assert_eq!(
            moves,
            vec![
                Square::new(2, 3),
                Square::new(3, 2),
                Square::new(4, 5),
                Square::new(5, 4),
            ]
        );
    }

    #[test]
    fn test_initial_white_moves() {
        let board = Board::new();
        let moves = legal_moves(&board, Cell::White);
        assert_eq!(
            moves,
            vec![
                Square::new(2, 4),
                Square::new(3, 5),
                Square::new(4, 2),
                Square::new(5, 3),
            ]
        );
    }

    #[test]
    fn test_each_opening_move_flips_one() {
        let board = Board::new();
        for sq in legal_moves(&board, Cell::Black) {
            let mut copy = board;
            assert_eq!(apply_move(&mut copy, sq, Cell::Black), 1);
            assert_eq!(copy.count(Cell::Black), 4);
            assert_eq!(copy.count(Cell::White), 1);
        }
    }

    #[test]
    fn test_occupied_square_is_illegal() {
        let board = Board::new();
        assert!(!is_legal(&board, Square::new(3, 3), Cell::Black));
        assert!(!is_legal(&board, Square::new(3, 4), Cell::White));
    }

    #[test]
    fn test_non_colour_has_no_moves() {
        let board = Board::new();
        assert!(legal_moves(&board, Cell::Empty).is_empty());
        assert_eq!(count_legal_moves(&board, Cell::Border), 0);
        assert!(!has_legal_move(&board, Cell::Empty));
    }

    #[test]
    fn test_no_moves_when_one_colour_left() {
        let mut board = Board::empty();
        board.place(Square::new(0, 0), Cell::Black);
        board.place(Square::new(7, 7), Cell::Black);
        assert!(!has_legal_move(&board, Cell::Black));
        assert!(!has_legal_move(&board, Cell::White));
    }

    #[test]
    fn test_count_matches_enumeration() {
        let mut board = Board::new();
        apply_move(&mut board, Square::new(2, 3), Cell::Black);
        assert_eq!(
            count_legal_moves(&board, Cell::White),
            legal_moves(&board, Cell::White).len()
        );
        assert_eq!(count_legal_moves(&board, Cell::White), 3);
    }
}
