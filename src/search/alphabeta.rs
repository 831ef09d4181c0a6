//! Alpha-Beta search for scoring a single root move
//!
//! This module implements the search each worker runs. Given a candidate
//! root move for the engine's colour, it plays the move on a private board
//! copy and searches the replies with minimax and alpha-beta pruning.
//!
//! # Features
//!
//! - Adaptive depth picked from the root branching factor
//! - Fail-hard alpha-beta: a node whose move was played by the engine
//!   maximises over the replies, an opponent node minimises
//! - Every recursive call owns its board by value; siblings never share state
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Cell, Square};
//! use othello::search::Searcher;
//!
//! let mut searcher = Searcher::new(Cell::Black);
//! let board = Board::new();
//!
//! let score = searcher.search_depth(&board, Square::new(2, 3), 2);
//! println!("(2,3) scores {score}");
//! ```

use crate::board::{Board, Cell, Square};
use crate::eval::evaluate;
use crate::rules::{apply_move, count_legal_moves, legal_moves};

/// Infinity for alpha-beta bounds, well outside any heuristic score.
pub const SCORE_INF: i32 = 10_000_000;

/// Search depth from the number of legal root moves.
///
/// Few moves allow a deeper look; a crowded position is searched shallower.
/// Anything outside the banded ranges (0-2 moves) gets the default of 7.
#[inline]
pub fn adaptive_depth(branching: usize) -> u8 {
    match branching {
        3..=7 => 6,
        8..=14 => 5,
        15.. => 4,
        _ => 7,
    }
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited (one per move played)
    pub nodes: u64,
    /// Static evaluations performed
    pub leaves: u64,
    /// Sibling scans cut short by `alpha >= beta`
    pub cutoffs: u64,
}

impl SearchStats {
    /// Merge another stats into this one (for combining worker stats)
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.cutoffs += other.cutoffs;
    }
}

/// Alpha-beta searcher bound to the engine's colour.
///
/// Scores are always from the engine's perspective, whichever side is to
/// move inside the tree.
#[derive(Debug, Clone)]
pub struct Searcher {
    own: Cell,
    /// Optional ceiling on the adaptive depth
    depth_cap: Option<u8>,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(own: Cell) -> Self {
        Self {
            own,
            depth_cap: None,
            stats: SearchStats::default(),
        }
    }

    /// Create a searcher whose adaptive depth never exceeds `depth_cap`.
    #[must_use]
    pub fn with_depth_cap(own: Cell, depth_cap: Option<u8>) -> Self {
        Self {
            depth_cap,
            ..Self::new(own)
        }
    }

    #[must_use]
    pub fn own_colour(&self) -> Cell {
        self.own
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Return the accumulated stats and start counting from zero.
    pub fn take_stats(&mut self) -> SearchStats {
        std::mem::take(&mut self.stats)
    }

    /// Depth used for root moves on `board`.
    #[must_use]
    pub fn depth_for(&self, board: &Board) -> u8 {
        let depth = adaptive_depth(count_legal_moves(board, self.own));
        match self.depth_cap {
            Some(cap) => depth.min(cap),
            None => depth,
        }
    }

    /// Score the root move `root` for the engine's colour with adaptive depth.
    pub fn search(&mut self, board: &Board, root: Square) -> i32 {
        let depth = self.depth_for(board);
        self.search_depth(board, root, depth)
    }

    /// Score the root move `root` searching exactly `depth` reply plies.
    pub fn search_depth(&mut self, board: &Board, root: Square, depth: u8) -> i32 {
        self.alpha_beta(*board, root, self.own, depth, -SCORE_INF, SCORE_INF)
    }

    /// Evaluate the incoming board at depth 0; otherwise play `mv` for
    /// `mover` on the owned board and search the replies.
    ///
    /// A node whose move was played by the engine's colour maximises over
    /// the replies, an opponent node minimises. Fail-hard: the result is
    /// clamped to `[alpha, beta]`.
    fn alpha_beta(
        &mut self,
        mut board: Board,
        mv: Square,
        mover: Cell,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 {
            self.stats.leaves += 1;
            return evaluate(&board, self.own);
        }

        apply_move(&mut board, mv, mover);

        let replier = mover.opponent();
        let replies = legal_moves(&board, replier);
        if replies.is_empty() {
            self.stats.leaves += 1;
            return evaluate(&board, self.own);
        }

        let maximising = mover == self.own;
        for reply in replies {
            let score = self.alpha_beta(board, reply, replier, depth - 1, alpha, beta);

            if maximising {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        if maximising {
            alpha
        } else {
            beta
        }
    }
}
