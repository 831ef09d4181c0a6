//! Worker pool for distributed root-move scoring
//!
//! Each worker is a thread with its own inbox and a private copy of the
//! round's board. The coordinator talks to workers only through messages:
//!
//! 1. `Round(board)` opens a round and hands every worker the canonical board
//! 2. `Search(square)` asks one worker to score one root move
//! 3. `Stop` closes the round; the worker waits for the next `Round`
//! 4. `Shutdown` (or a dropped inbox) ends the worker thread
//!
//! Workers never speak first; they answer each `Search` with one report.

use std::sync::mpsc::{channel, Receiver, SendError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use tracing::{debug, trace, warn};

use crate::board::{Board, Cell, Square};
use crate::error::EngineError;
use crate::search::{SearchStats, Searcher};

/// A root move paired with its search score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub square: Square,
    pub score: i32,
}

/// Coordinator to worker messages.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    /// Start of a round, carrying the canonical board snapshot
    Round(Board),
    /// Score this root move against the round's board
    Search(Square),
    /// End of the round
    Stop,
    /// End of the match
    Shutdown,
}

/// Worker to coordinator message.
#[derive(Debug, Clone)]
pub struct WorkerReport {
    pub worker: usize,
    pub result: ScoreResult,
    pub stats: SearchStats,
}

/// One worker unit: owns its searcher and board copy.
struct Worker {
    id: usize,
    searcher: Searcher,
    inbox: Receiver<WorkerMessage>,
    outbox: Sender<WorkerReport>,
}

impl Worker {
    fn run(mut self) {
        debug!(worker = self.id, "worker started");

        'rounds: loop {
            let board = match self.inbox.recv() {
                Ok(WorkerMessage::Round(board)) => board,
                Ok(WorkerMessage::Shutdown) | Err(_) => break,
                Ok(other) => {
                    warn!(worker = self.id, message = ?other, "message outside a round ignored");
                    continue;
                }
            };

            loop {
                match self.inbox.recv() {
                    Ok(WorkerMessage::Search(square)) => {
                        let score = self.searcher.search(&board, square);
                        let report = WorkerReport {
                            worker: self.id,
                            result: ScoreResult { square, score },
                            stats: self.searcher.take_stats(),
                        };
                        if self.outbox.send(report).is_err() {
                            break 'rounds;
                        }
                    }
                    Ok(WorkerMessage::Stop) => break,
                    Ok(WorkerMessage::Round(_)) => {
                        warn!(worker = self.id, "round started before the previous one stopped");
                    }
                    Ok(WorkerMessage::Shutdown) | Err(_) => break 'rounds,
                }
            }
        }

        debug!(worker = self.id, "worker exiting");
    }
}

/// Fixed set of worker threads plus the shared result channel.
pub struct WorkerPool {
    inboxes: Vec<Sender<WorkerMessage>>,
    reports: Receiver<WorkerReport>,
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawn `count` workers searching for `colour`.
    pub fn spawn(count: usize, colour: Cell, depth_cap: Option<u8>) -> Result<Self, EngineError> {
        let (report_tx, reports) = channel();
        let mut pool = Self {
            inboxes: Vec::with_capacity(count),
            reports,
            handles: Vec::with_capacity(count),
        };

        for id in 0..count {
            let (tx, inbox) = channel();
            let worker = Worker {
                id,
                searcher: Searcher::with_depth_cap(colour, depth_cap),
                inbox,
                outbox: report_tx.clone(),
            };
            // On failure the pool drops here and shuts down the ones already running.
            let handle = thread::Builder::new()
                .name(format!("othello-worker-{id}"))
                .spawn(move || worker.run())
                .map_err(EngineError::WorkerSpawn)?;
            pool.inboxes.push(tx);
            pool.handles.push(handle);
        }

        Ok(pool)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inboxes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inboxes.is_empty()
    }

    fn send(&self, worker: usize, message: WorkerMessage) -> Result<(), EngineError> {
        self.inboxes[worker]
            .send(message)
            .map_err(|SendError(_)| EngineError::WorkerDisconnected { worker })
    }

    /// Broadcast the board that opens a round.
    pub fn begin_round(&self, board: &Board) -> Result<(), EngineError> {
        for worker in 0..self.len() {
            self.send(worker, WorkerMessage::Round(*board))?;
        }
        Ok(())
    }

    /// Send one root move to one worker.
    pub fn assign(&self, worker: usize, square: Square) -> Result<(), EngineError> {
        trace!(worker, square = ?square, "assign");
        self.send(worker, WorkerMessage::Search(square))
    }

    /// Close the round on every worker.
    pub fn end_round(&self) -> Result<(), EngineError> {
        for worker in 0..self.len() {
            self.send(worker, WorkerMessage::Stop)?;
        }
        Ok(())
    }

    /// Non-blocking check for a finished search.
    pub fn try_report(&self) -> Result<Option<WorkerReport>, EngineError> {
        match self.reports.try_recv() {
            Ok(report) => Ok(Some(report)),
            Err(TryRecvError::Empty) => Ok(None),
            // Every worker has dropped its sender
            Err(TryRecvError::Disconnected) => Err(EngineError::PoolDisconnected),
        }
    }

    /// First worker whose thread has already exited, if any.
    #[must_use]
    pub fn dead_worker(&self) -> Option<usize> {
        self.handles.iter().position(JoinHandle::is_finished)
    }

    /// Tell every worker the match is over and wait for them.
    pub fn shutdown(&mut self) {
        for inbox in self.inboxes.drain(..) {
            // A worker that already exited has nothing left to stop.
            let _ = inbox.send(WorkerMessage::Shutdown);
        }
        for handle in self.handles.drain(..) {
            if handle.join().is_err() {
                warn!("worker thread panicked");
            }
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn wait_report(pool: &WorkerPool) -> WorkerReport {
        let deadline = Instant::now() + Duration::from_secs(30);
        loop {
            if let Some(report) = pool.try_report().unwrap() {
                return report;
            }
            assert!(Instant::now() < deadline, "no report");
            thread::yield_now();
        }
    }

    #[test]
    fn test_worker_scores_like_local_searcher() {
        let pool = WorkerPool::spawn(2, Cell::Black, Some(2)).unwrap();
        let board = Board::new();
        let square = Square::new(2, 3);

        pool.begin_round(&board).unwrap();
        pool.assign(1, square).unwrap();
        let report = wait_report(&pool);
        pool.end_round().unwrap();

        let expected = Searcher::with_depth_cap(Cell::Black, Some(2)).search(&board, square);
        assert_eq!(report.worker, 1);
        assert_eq!(report.result, ScoreResult { square, score: expected });
        assert!(report.stats.nodes > 0);
    }

    #[test]
    fn test_workers_survive_several_rounds() {
        let pool = WorkerPool::spawn(1, Cell::White, Some(1)).unwrap();
        let board = Board::new();

        for square in [Square::new(2, 4), Square::new(5, 3)] {
            pool.begin_round(&board).unwrap();
            pool.assign(0, square).unwrap();
            assert_eq!(wait_report(&pool).result.square, square);
            pool.end_round().unwrap();
        }
        assert_eq!(pool.dead_worker(), None);
    }

    #[test]
    fn test_shutdown_joins_workers() {
        let mut pool = WorkerPool::spawn(3, Cell::Black, Some(1)).unwrap();
        assert_eq!(pool.len(), 3);
        pool.shutdown();
        assert!(pool.is_empty());
        // Dropping after an explicit shutdown is a no-op
        drop(pool);
    }

    #[test]
    fn test_empty_pool_reports_nothing() {
        let pool = WorkerPool::spawn(0, Cell::Black, None).unwrap();
        assert!(pool.is_empty());
        // No senders left at all
        assert!(matches!(pool.try_report(), Err(EngineError::PoolDisconnected)));
    }

    #[test]
    fn test_disconnect_after_shutdown_names_no_worker() {
        let mut pool = WorkerPool::spawn(2, Cell::Black, Some(1)).unwrap();
        pool.shutdown();
        assert!(matches!(pool.try_report(), Err(EngineError::PoolDisconnected)));
    }
}
