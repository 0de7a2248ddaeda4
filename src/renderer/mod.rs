//! Output sinks.
//!
//! A sink owns the display target: it clears whatever it previously wrote,
//! then writes the new frame in its place. The scheduler's timer thread is
//! the only writer, so no sink needs to synchronize its target.
//!
//! [`ConsoleSink`] rewrites one terminal line per frame; [`MemorySink`]
//! records frames for tests and headless embedding.

mod console;

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

pub use console::ConsoleSink;

/// Receives one rendered frame per tick.
pub trait Sink {
    /// Clear the previous frame and write `line` in its place.
    ///
    /// Errors are non-fatal to the clock run: the scheduler logs them and
    /// retries on the next tick.
    fn display(&mut self, line: &str) -> io::Result<()>;
}

/// Records frames instead of writing to a terminal.
///
/// Clones share the same frame store, so a test can keep one handle while
/// the scheduler owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    frames: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames recorded so far, oldest first.
    pub fn frames(&self) -> Vec<String> {
        self.frames.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.lock().len()
    }
}

impl Sink for MemorySink {
    fn display(&mut self, line: &str) -> io::Result<()> {
        self.frames.lock().push(line.to_string());
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_frames_in_order() {
        let mut sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.display("first").unwrap();
        sink.display("second").unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.frames(), vec!["first", "second"]);
    }

    #[test]
    fn test_memory_sink_clones_share_frames() {
        let mut writer = MemorySink::new();
        let reader = writer.clone();

        writer.display("tick").unwrap();

        assert_eq!(reader.frames(), vec!["tick"]);
    }
}
