//! Line-oriented referee transport
//!
//! One command per line: `gen_move`, `play_move <move>` or `game_over`,
//! where `<move>` is two digits (row, column) or `pass`. Our moves are
//! written back one per line.

use std::io::{BufRead, Write};

use tracing::trace;

use crate::error::TransportError;
use crate::session::{Command, Transport};

/// Referee connection over a reader/writer pair (stdin/stdout in the binary).
pub struct LineTransport<R, W> {
    reader: R,
    writer: W,
    line: String,
}

impl<R: BufRead, W: Write> LineTransport<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: String::new(),
        }
    }

    /// Recover the writer, e.g. to inspect what was sent.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Transport for LineTransport<R, W> {
    fn fetch_command(&mut self) -> Result<Command, TransportError> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Err(TransportError::Closed);
            }

            let mut parts = self.line.split_whitespace();
            let Some(command) = parts.next() else {
                // Blank line
                continue;
            };
            let opponent_move = parts.next().unwrap_or_default();
            if parts.next().is_some() {
                return Err(TransportError::Malformed(self.line.trim_end().to_string()));
            }

            trace!(command, opponent_move, "referee command");
            return Ok(Command::from_parts(command, opponent_move));
        }
    }

    fn send_move(&mut self, mv: &str) -> Result<(), TransportError> {
        self.writer.write_all(mv.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
