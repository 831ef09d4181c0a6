//! Othello engine with distributed root-move search
//!
//! A tournament Othello player: a coordinator spreads the legal root moves
//! over a pool of worker threads, each worker scores its move with an
//! alpha-beta search over a private board copy, and the best score is played.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Bordered 10x10 grid, squares, moves, rendering
//! - [`rules`]: Legality, bracket finding and disc flipping
//! - [`eval`]: Five-feature positional heuristic
//! - [`search`]: Adaptive-depth alpha-beta search of one root move
//! - [`worker`]: Worker threads and their message protocol
//! - [`engine`]: The coordinator that owns the canonical board
//! - [`session`]: Referee-driven match state machine
//! - [`transport`]: Line-oriented referee transport
//!
//! # Quick Start
//!
//! ```
//! use othello::{Cell, Coordinator, EngineConfig, Move, Square};
//!
//! // Two worker threads, shallow search for the doc test
//! let config = EngineConfig::serial().with_workers(2).with_max_depth(Some(2));
//! let mut engine = Coordinator::with_config(Cell::White, config).unwrap();
//!
//! // Black opens at (2,3); white answers
//! engine.apply_opponent_move(Move::Place(Square::new(2, 3)));
//! let reply = engine.generate_move().unwrap();
//! println!("White plays {reply}");
//! ```
//!
//! # Round Protocol
//!
//! 1. Coordinator broadcasts the canonical board to every worker
//! 2. One root move per worker; corners go out first
//! 3. Each finished worker immediately gets the next unassigned move
//! 4. Once every move has a score, workers are told to stop

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;
pub mod transport;
pub mod worker;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Move, Square, BOARD_SIZE};
pub use config::{parse_colour, EngineConfig, Strategy};
pub use engine::{select_best, Coordinator};
pub use error::{EngineError, TransportError};
pub use session::{Command, EndReason, GameSession, SessionState, SessionSummary, Transport};
pub use transport::LineTransport;
pub use worker::ScoreResult;
