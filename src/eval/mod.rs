//! Evaluation module for Othello positions
//!
//! This module provides the static heuristic used at search leaves.
//! The evaluation combines:
//! - Positional weights (corners good, squares next to corners bad)
//! - Disc parity
//! - Mobility, damped as the game progresses
//! - Corner occupancy
//! - Corner closeness around still-empty corners

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, game_stage, Features};
pub use weights::{FeatureWeight, POSITION_WEIGHTS};
