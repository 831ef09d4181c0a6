//! Weights for Othello evaluation
//!
//! The feature coefficients are tuned values; move choice is sensitive to
//! every digit.

use crate::board::{Square, GRID_SIZE};

/// Per-square weights on the bordered 10x10 grid (border entries are zero).
#[rustfmt::skip]
pub const POSITION_WEIGHTS: [i32; GRID_SIZE] = [
    0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    0, 120, -20,  20,   5,   5,  20, -20, 120,   0,
    0, -20, -40,  -5,  -5,  -5,  -5, -40, -20,   0,
    0,  20,  -5,  15,   3,   3,  15,  -5,  20,   0,
    0,   5,  -5,   3,   3,   3,   3,  -5,   5,   0,
    0,   5,  -5,   3,   3,   3,   3,  -5,   5,   0,
    0,  20,  -5,  15,   3,   3,  15,  -5,  20,   0,
    0, -20, -40,  -5,  -5,  -5,  -5, -40, -20,   0,
    0, 120, -20,  20,   5,   5,  20, -20, 120,   0,
    0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
];

/// Feature coefficients for the final linear combination
pub struct FeatureWeight;

impl FeatureWeight {
    /// Disc parity multiplier
    pub const PARITY: i32 = 10;
    pub const MOBILITY: f64 = 78.922;
    pub const CORNER_OCCUPANCY: f64 = 801.724;
    pub const CORNER_CLOSENESS: f64 = 382.026;

    /// Raw value of one corner held
    pub const CORNER_VALUE: i32 = 25;
    /// Raw value of one disc next to an empty corner (negative: it gives the corner away)
    pub const CLOSENESS_VALUE: f64 = -12.5;
}

/// Each corner with the three squares touching it.
pub const CORNER_NEIGHBOURS: [(usize, [usize; 3]); 4] = [
    (11, [12, 22, 21]),
    (18, [17, 27, 28]),
    (81, [82, 72, 71]),
    (88, [78, 77, 87]),
];

/// Positional weight of an interior square
#[inline]
pub fn square_weight(sq: Square) -> i32 {
    POSITION_WEIGHTS[sq.index()]
}
