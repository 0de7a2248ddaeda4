//! Terminal sink.
//!
//! Rewrites a single line in place each frame: cursor to column 0, clear
//! the current line, write the new frame, flush. Output goes through any
//! `io::Write`, so the unit tests drive it with a byte buffer instead of a
//! live terminal.

use std::io::{self, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use log::debug;

use super::Sink;

/// Sink that rewrites one terminal line per frame.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<io::Stdout> {
    /// Sink writing to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn clear_line(&mut self) -> io::Result<()> {
        queue!(self.out, MoveToColumn(0), Clear(ClearType::CurrentLine))
    }
}

impl<W: Write> Sink for ConsoleSink<W> {
    fn display(&mut self, line: &str) -> io::Result<()> {
        // Clearing is best effort: a target that rejects it gets the new
        // frame appended on a fresh line instead.
        if let Err(e) = self.clear_line() {
            debug!("line clear unsupported, appending: {e}");
            self.out.write_all(b"\n")?;
        }
        self.out.write_all(line.as_bytes())?;
        self.out.flush()
    }
}

// =============================================================================
// Tests
// =============================================================================
