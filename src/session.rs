//! Per-match state machine
//!
//! The session alternates between fetching a referee command, generating our
//! own move and applying the opponent's move until the referee ends the game
//! or the transport fails:
//!
//! ```text
//! WaitingForCommand --gen_move--> GeneratingOwnMove ----+
//!        ^  |                                           |
//!        |  +--play_move--> ApplyingOpponentMove ---+   |
//!        +------------------------------------------+---+
//!        |
//!        +--game_over / transport failure--> GameOver
//! ```

use tracing::{debug, error, info, warn};

use crate::board::{Board, Cell, Move};
use crate::engine::Coordinator;
use crate::error::{EngineError, TransportError};
use crate::eval::evaluate;

/// A command from the referee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    GameOver,
    GenMove,
    /// Opponent's move string (two digits or `pass`)
    PlayMove(String),
    Unknown(String),
}

impl Command {
    /// Decode the referee's `(command, opponent move)` pair.
    pub fn from_parts(command: &str, opponent_move: &str) -> Self {
        match command.trim() {
            "game_over" => Command::GameOver,
            "gen_move" => Command::GenMove,
            "play_move" => Command::PlayMove(opponent_move.to_string()),
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// The referee connection. Any error ends the match.
pub trait Transport {
    /// Block until the next referee command arrives.
    fn fetch_command(&mut self) -> Result<Command, TransportError>;

    /// Send our move in wire form (see `Move::to_wire`).
    fn send_move(&mut self, mv: &str) -> Result<(), TransportError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    WaitingForCommand,
    GeneratingOwnMove,
    ApplyingOpponentMove(String),
    GameOver,
}

/// Why the match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndReason {
    /// The referee sent `game_over`
    #[default]
    Referee,
    /// Fetching a command failed
    FetchFailed,
    /// Sending our move failed
    SendFailed,
}

/// What happened over the match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub own_moves: u32,
    pub own_passes: u32,
    pub opponent_moves: u32,
    pub opponent_passes: u32,
    pub black_discs: u32,
    pub white_discs: u32,
    pub end: EndReason,
}

/// One match against the referee.
pub struct GameSession<T: Transport> {
    coordinator: Coordinator,
    transport: T,
    state: SessionState,
    summary: SessionSummary,
}

impl<T: Transport> GameSession<T> {
    pub fn new(coordinator: Coordinator, transport: T) -> Self {
        Self {
            coordinator,
            transport,
            state: SessionState::WaitingForCommand,
            summary: SessionSummary::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.coordinator.board()
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Perform one state transition.
    pub fn step(&mut self) -> Result<(), EngineError> {
        let state = std::mem::replace(&mut self.state, SessionState::GameOver);
        self.state = match state {
            SessionState::WaitingForCommand => self.wait_for_command(),
            SessionState::GeneratingOwnMove => self.generate_own_move()?,
            SessionState::ApplyingOpponentMove(mv) => self.apply_opponent_move(&mv),
            SessionState::GameOver => SessionState::GameOver,
        };
        Ok(())
    }

    /// Drive the match to `GameOver`. The board and the workers are released
    /// when the session is consumed.
    pub fn run(mut self) -> Result<SessionSummary, EngineError> {
        info!(colour = %self.coordinator.colour(), "match started");
        while self.state != SessionState::GameOver {
            self.step()?;
        }

        let board = self.coordinator.board();
        self.summary.black_discs = board.count(Cell::Black);
        self.summary.white_discs = board.count(Cell::White);
        info!(
            black = self.summary.black_discs,
            white = self.summary.white_discs,
            end = ?self.summary.end,
            "match finished"
        );
        Ok(self.summary)
    }

    fn wait_for_command(&mut self) -> SessionState {
        match self.transport.fetch_command() {
            Ok(Command::GameOver) => {
                info!("game over");
                self.summary.end = EndReason::Referee;
                SessionState::GameOver
            }
            Ok(Command::GenMove) => SessionState::GeneratingOwnMove,
            Ok(Command::PlayMove(mv)) => SessionState::ApplyingOpponentMove(mv),
            Ok(Command::Unknown(cmd)) => {
                warn!(command = %cmd, "unknown command from referee");
                SessionState::WaitingForCommand
            }
            Err(e) => {
                error!(error = %e, "error getting command");
                self.summary.end = EndReason::FetchFailed;
                SessionState::GameOver
            }
        }
    }

    fn generate_own_move(&mut self) -> Result<SessionState, EngineError> {
        let mv = self.coordinator.generate_move()?;
        match mv {
            Move::Pass => self.summary.own_passes += 1,
            Move::Place(_) => self.summary.own_moves += 1,
        }

        if let Err(e) = self.transport.send_move(&mv.to_wire()) {
            error!(error = %e, "move send failed");
            self.summary.end = EndReason::SendFailed;
            return Ok(SessionState::GameOver);
        }

        self.log_board();
        Ok(SessionState::WaitingForCommand)
    }

    fn apply_opponent_move(&mut self, raw: &str) -> SessionState {
        match raw.parse::<Move>() {
            Ok(mv) => {
                match mv {
                    Move::Pass => self.summary.opponent_passes += 1,
                    Move::Place(_) => self.summary.opponent_moves += 1,
                }
                self.coordinator.apply_opponent_move(mv);
                self.log_board();
            }
            Err(e) => warn!(error = %e, "opponent move ignored"),
        }
        SessionState::WaitingForCommand
    }

    fn log_board(&self) {
        let board = self.coordinator.board();
        debug!(
            black = evaluate(board, Cell::Black),
            white = evaluate(board, Cell::White),
            "board\n{board}"
        );
    }
}
