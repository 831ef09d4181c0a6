use super::*;
use crate::rules::{apply_move, legal_moves};

#[test]
fn test_cell_opponent() {
    assert_eq!(Cell::Black.opponent(), Cell::White);
    assert_eq!(Cell::White.opponent(), Cell::Black);
    assert_eq!(Cell::Empty.opponent(), Cell::Empty);
    assert_eq!(Cell::Border.opponent(), Cell::Empty);
}

#[test]
fn test_square_new() {
    let sq = Square::new(2, 3);
    assert_eq!(sq.row(), 2);
    assert_eq!(sq.col(), 3);
    assert_eq!(sq.index(), 34);
}

#[test]
fn test_index_round_trip() {
    let mut interior = 0;
    for idx in 0..GRID_SIZE {
        if let Some(sq) = Square::from_index(idx) {
            interior += 1;
            assert_eq!(sq.index(), idx);
            assert_eq!(Square::new(sq.row(), sq.col()).index(), idx);
        }
    }
    assert_eq!(interior, 64);
}

#[test]
fn test_border_indices_rejected() {
    for idx in [0, 9, 10, 19, 20, 89, 90, 99, 100] {
        assert_eq!(Square::from_index(idx), None, "index {idx}");
    }
}

#[test]
fn test_corner_indices() {
    assert_eq!(Square::new(0, 0).index(), 11);
    assert_eq!(Square::new(0, 7).index(), 18);
    assert_eq!(Square::new(7, 0).index(), 81);
    assert_eq!(Square::new(7, 7).index(), 88);
    assert!(Square::new(7, 7).is_corner());
    assert!(!Square::new(1, 1).is_corner());
}

#[test]
fn test_start_position() {
    let board = Board::new();
    assert_eq!(board.count(Cell::Black), 2);
    assert_eq!(board.count(Cell::White), 2);
    assert_eq!(board.count(Cell::Empty), 60);
    assert_eq!(board.get(Square::new(3, 3)), Cell::White);
    assert_eq!(board.get(Square::new(3, 4)), Cell::Black);
    assert_eq!(board.get(Square::new(4, 3)), Cell::Black);
    assert_eq!(board.get(Square::new(4, 4)), Cell::White);
}

#[test]
fn test_border_survives_a_game() {
    let mut board = Board::new();
    let mut colour = Cell::Black;
    let mut discs = board.disc_count();

    // Always take the first legal move until neither side can move
    for _ in 0..60 {
        let moves = legal_moves(&board, colour);
        if let Some(&sq) = moves.first() {
            apply_move(&mut board, sq, colour);
            assert_eq!(board.disc_count(), discs + 1);
            discs += 1;
        } else if legal_moves(&board, colour.opponent()).is_empty() {
            break;
        }
        colour = colour.opponent();
    }

    assert!(discs <= INTERIOR_CELLS);
    for idx in 0..GRID_SIZE {
        if Square::from_index(idx).is_none() {
            assert_eq!(board.cell(idx), Cell::Border, "index {idx}");
        }
    }
    assert_eq!(
        board.count(Cell::Black) + board.count(Cell::White) + board.count(Cell::Empty),
        INTERIOR_CELLS
    );
}

#[test]
fn test_move_strings() {
    assert_eq!(Move::Place(Square::new(2, 3)).to_string(), "23");
    assert_eq!(Move::Place(Square::new(0, 7)).to_wire(), "07\n");
    assert_eq!(Move::Pass.to_wire(), "pass\n");

    assert_eq!("23\n".parse::<Move>(), Ok(Move::Place(Square::new(2, 3))));
    assert_eq!("77".parse::<Move>(), Ok(Move::Place(Square::new(7, 7))));
    assert_eq!("pass\n".parse::<Move>(), Ok(Move::Pass));
    assert!("88".parse::<Move>().is_err());
    assert!("2".parse::<Move>().is_err());
    assert!("abc".parse::<Move>().is_err());
}

#[test]
fn test_move_string_round_trip() {
    for sq in Square::all() {
        let mv = Move::Place(sq);
        assert_eq!(mv.to_wire().parse::<Move>(), Ok(mv));
    }
}

#[test]
fn test_board_rendering() {
    let rendered = Board::new().to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "   1 2 3 4 5 6 7 8");
    assert_eq!(lines[4], "4  . . . w b . . .");
    assert_eq!(lines[5], "5  . . . b w . . .");
}
