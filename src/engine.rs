//! Move-generation coordinator
//!
//! The coordinator owns the canonical board and drives one round per move:
//!
//! 1. **Enumerate**: legal root moves for the engine's colour (none means pass)
//! 2. **Score**: serially when there are no workers, otherwise by handing
//!    root moves to the worker pool and refilling whichever worker reports
//!    first (corners are dispatched ahead of the rest)
//! 3. **Select**: the highest score wins, the first result seen breaks ties
//! 4. **Commit**: the chosen move is applied to the canonical board
//!
//! # Example
//!
//! ```
//! use othello::{Cell, Coordinator, EngineConfig, Move};
//!
//! let config = EngineConfig::serial().with_max_depth(Some(1));
//! let mut coordinator = Coordinator::with_config(Cell::Black, config).unwrap();
//!
//! let mv = coordinator.generate_move().unwrap();
//! assert_ne!(mv, Move::Pass);
//! assert_eq!(coordinator.board().disc_count(), 5);
//! ```

use std::thread;
use std::time::Duration;

use rand::seq::IndexedRandom;
use tracing::{debug, info, trace};

use crate::board::{Board, Cell, Move, Square};
use crate::config::{EngineConfig, Strategy};
use crate::error::EngineError;
use crate::rules::{apply_move, legal_moves};
use crate::search::{SearchStats, Searcher};
use crate::worker::{ScoreResult, WorkerPool};

/// Pause between empty polls of the result channel.
const POLL_INTERVAL: Duration = Duration::from_micros(100);

/// Owner of the canonical board; produces one move per round.
pub struct Coordinator {
    board: Board,
    colour: Cell,
    config: EngineConfig,
    /// Local searcher for the serial path
    searcher: Searcher,
    pool: Option<WorkerPool>,
}

impl Coordinator {
    /// Create a coordinator with the default configuration.
    pub fn new(colour: Cell) -> Result<Self, EngineError> {
        Self::with_config(colour, EngineConfig::default())
    }

    /// Create a coordinator, spawning `config.workers` worker threads.
    pub fn with_config(colour: Cell, config: EngineConfig) -> Result<Self, EngineError> {
        if !colour.is_colour() {
            return Err(EngineError::InvalidColour(colour.to_string()));
        }

        let pool = match (config.strategy, config.workers) {
            (Strategy::AlphaBeta, n) if n > 0 => {
                Some(WorkerPool::spawn(n, colour, config.max_depth)?)
            }
            _ => None,
        };

        info!(
            colour = %colour,
            workers = pool.as_ref().map_or(0, WorkerPool::len),
            strategy = ?config.strategy,
            "coordinator ready"
        );

        Ok(Self {
            board: Board::new(),
            colour,
            searcher: Searcher::with_depth_cap(colour, config.max_depth),
            config,
            pool,
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn colour(&self) -> Cell {
        self.colour
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of dedicated worker threads (0 on the serial path).
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.pool.as_ref().map_or(0, WorkerPool::len)
    }

    /// Run one round: pick a move, apply it to the canonical board, return it.
    pub fn generate_move(&mut self) -> Result<Move, EngineError> {
        let candidates = legal_moves(&self.board, self.colour);
        if candidates.is_empty() {
            info!(colour = %self.colour, "no legal move, passing");
            return Ok(Move::Pass);
        }

        let chosen = match self.config.strategy {
            Strategy::Random => candidates.choose(&mut rand::rng()).copied(),
            Strategy::AlphaBeta => {
                let results = self.score_candidates(&candidates)?;
                select_best(&results).map(|best| {
                    debug!(square = ?best.square, score = best.score, "best root move");
                    best.square
                })
            }
        };

        let Some(square) = chosen else {
            return Ok(Move::Pass);
        };

        apply_move(&mut self.board, square, self.colour);
        let mv = Move::Place(square);
        info!(colour = %self.colour, mv = %mv, discs = self.board.disc_count(), "own move");
        Ok(mv)
    }

    /// Apply the opponent's move to the canonical board. A pass changes nothing.
    pub fn apply_opponent_move(&mut self, mv: Move) {
        if let Move::Place(square) = mv {
            apply_move(&mut self.board, square, self.colour.opponent());
        }
        info!(mv = %mv, discs = self.board.disc_count(), "opponent move");
    }

    /// Score every candidate root move against the canonical board without
    /// committing anything. Results come back in completion order.
    pub fn score_candidates(&mut self, candidates: &[Square]) -> Result<Vec<ScoreResult>, EngineError> {
        let mut results = Vec::new();
        results
            .try_reserve_exact(candidates.len())
            .map_err(|_| EngineError::Resource {
                what: "score results",
                requested: candidates.len(),
            })?;

        let stats = match &self.pool {
            Some(pool) => distribute(pool, &self.board, candidates, &mut results)?,
            None => {
                for &square in candidates {
                    let score = self.searcher.search(&self.board, square);
                    results.push(ScoreResult { square, score });
                }
                self.searcher.take_stats()
            }
        };

        debug!(
            candidates = candidates.len(),
            nodes = stats.nodes,
            leaves = stats.leaves,
            cutoffs = stats.cutoffs,
            "round scored"
        );
        Ok(results)
    }

    /// Stop and join all workers. Also happens on drop.
    pub fn shutdown(&mut self) {
        if let Some(mut pool) = self.pool.take() {
            pool.shutdown();
        }
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Run one distributed round over the pool, pushing results in arrival order.
fn distribute(
    pool: &WorkerPool,
    board: &Board,
    candidates: &[Square],
    results: &mut Vec<ScoreResult>,
) -> Result<SearchStats, EngineError> {
    let queue = dispatch_order(candidates);
    let mut stats = SearchStats::default();
    let mut busy = vec![false; pool.len()];

    pool.begin_round(board)?;

    let mut next = 0;
    for worker in 0..pool.len().min(queue.len()) {
        pool.assign(worker, queue[next])?;
        busy[worker] = true;
        next += 1;
    }

    while results.len() < queue.len() {
        let Some(report) = pool.try_report()? else {
            if let Some(worker) = pool.dead_worker().filter(|&w| busy[w]) {
                return Err(EngineError::WorkerDisconnected { worker });
            }
            thread::sleep(POLL_INTERVAL);
            continue;
        };

        trace!(
            worker = report.worker,
            square = ?report.result.square,
            score = report.result.score,
            "result"
        );
        results.push(report.result);
        stats.merge(&report.stats);
        busy[report.worker] = false;

        if results.len() < queue.len() && next < queue.len() {
            pool.assign(report.worker, queue[next])?;
            busy[report.worker] = true;
            next += 1;
        }
    }

    pool.end_round()?;
    Ok(stats)
}

/// Dispatch order: corners first, everything else in scan order.
pub fn dispatch_order(candidates: &[Square]) -> Vec<Square> {
    let (mut order, rest): (Vec<Square>, Vec<Square>) =
        candidates.iter().partition(|sq| sq.is_corner());
    order.extend(rest);
    order
}

/// Highest score; on ties the earliest result wins.
pub fn select_best(results: &[ScoreResult]) -> Option<ScoreResult> {
    results.iter().fold(None, |best: Option<ScoreResult>, &r| match best {
        Some(b) if b.score >= r.score => Some(b),
        _ => Some(r),
    })
}
