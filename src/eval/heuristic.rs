//! Heuristic evaluation function for Othello board positions
//!
//! This module provides the leaf evaluation for the alpha-beta search.
//! The score is a weighted sum of five features, each computed as
//! "player minus opponent":
//! - Position: fixed per-square weight table
//! - Parity: disc count difference as a percentage
//! - Mobility: legal move difference as a percentage, scaled by game stage
//! - Corner occupancy
//! - Corner closeness: discs touching a still-empty corner

use crate::board::{Board, Cell, Square};
use crate::rules::count_legal_moves;

use super::weights::{square_weight, FeatureWeight, CORNER_NEIGHBOURS};

/// Game stage from the number of discs on the board:
/// 1 up to 20 discs, 2 up to 40, 3 beyond.
#[inline]
pub fn game_stage(disc_count: u32) -> i32 {
    match disc_count {
        0..=20 => 1,
        21..=40 => 2,
        _ => 3,
    }
}

/// Per-feature breakdown of an evaluation, all from one player's perspective.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features {
    pub position: i32,
    pub parity: i32,
    /// Mobility after the stage multiplier is applied
    pub mobility: i32,
    pub corner_occupancy: i32,
    /// Truncated toward zero before weighting
    pub corner_closeness: i32,
}

impl Features {
    /// Compute all features of `board` for `colour`.
    pub fn compute(board: &Board, colour: Cell) -> Self {
        let opponent = colour.opponent();
        let stage = game_stage(board.disc_count());

        Self {
            position: position_score(board, colour, opponent),
            parity: parity_score(board, colour, opponent),
            mobility: (3 - stage) * mobility_score(board, colour, opponent),
            corner_occupancy: corner_occupancy(board, colour, opponent),
            corner_closeness: corner_closeness(board, colour, opponent),
        }
    }

    /// Weighted sum, truncated toward zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn score(&self) -> i32 {
        let total = f64::from(self.position + FeatureWeight::PARITY * self.parity)
            + FeatureWeight::MOBILITY * f64::from(self.mobility)
            + FeatureWeight::CORNER_OCCUPANCY * f64::from(self.corner_occupancy)
            + FeatureWeight::CORNER_CLOSENESS * f64::from(self.corner_closeness);
        total as i32
    }
}

/// Evaluate the board from the perspective of the given colour.
///
/// Positive values favour `colour`. The evaluation is antisymmetric:
/// `evaluate(board, Black) == -evaluate(board, White)`.
///
/// # Arguments
/// * `board` - The current board state
/// * `colour` - The colour to evaluate for
#[must_use]
pub fn evaluate(board: &Board, colour: Cell) -> i32 {
    if !colour.is_colour() {
        return 0;
    }
    Features::compute(board, colour).score()
}

fn position_score(board: &Board, colour: Cell, opponent: Cell) -> i32 {
    Square::all()
        .map(|sq| match board.get(sq) {
            c if c == colour => square_weight(sq),
            c if c == opponent => -square_weight(sq),
            _ => 0,
        })
        .sum()
}

/// `100 * (mine - theirs) / (mine + theirs)`, zero when the sum is zero.
#[inline]
fn percentage_difference(mine: i32, theirs: i32) -> i32 {
    let total = mine + theirs;
    if total == 0 {
        0
    } else {
        100 * (mine - theirs) / total
    }
}

fn parity_score(board: &Board, colour: Cell, opponent: Cell) -> i32 {
    percentage_difference(board.count(colour) as i32, board.count(opponent) as i32)
}

fn mobility_score(board: &Board, colour: Cell, opponent: Cell) -> i32 {
    percentage_difference(
        count_legal_moves(board, colour) as i32,
        count_legal_moves(board, opponent) as i32,
    )
}

fn corner_occupancy(board: &Board, colour: Cell, opponent: Cell) -> i32 {
    let (mut mine, mut theirs) = (0, 0);
    for &(corner, _) in &CORNER_NEIGHBOURS {
        match board.cell(corner) {
            c if c == colour => mine += 1,
            c if c == opponent => theirs += 1,
            _ => {}
        }
    }
    FeatureWeight::CORNER_VALUE * (mine - theirs)
}

/// Only empty corners count: holding a square next to one tends to hand
/// the corner to the other side.
#[allow(clippy::cast_possible_truncation)]
fn corner_closeness(board: &Board, colour: Cell, opponent: Cell) -> i32 {
    let (mut mine, mut theirs) = (0, 0);
    for &(corner, neighbours) in &CORNER_NEIGHBOURS {
        if board.cell(corner) != Cell::Empty {
            continue;
        }
        for idx in neighbours {
            match board.cell(idx) {
                c if c == colour => mine += 1,
                c if c == opponent => theirs += 1,
                _ => {}
            }
        }
    }
    (FeatureWeight::CLOSENESS_VALUE * f64::from(mine - theirs)) as i32
}
