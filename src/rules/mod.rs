//! Othello move rules
//!
//! This module implements:
//! - Bracket detection along the eight ray directions
//! - Move application with disc flipping
//! - Legal move enumeration in scan order

pub mod flips;
pub mod legal;

// Re-exports for convenient access
pub use flips::{apply_move, find_bracket};
pub use legal::{count_legal_moves, has_legal_move, is_legal, legal_moves};
