//! Search module for the Othello engine
//!
//! Contains the depth-bounded alpha-beta search that scores one candidate
//! root move, plus the adaptive depth rule.

pub mod alphabeta;

pub use alphabeta::{adaptive_depth, SearchStats, Searcher, SCORE_INF};
