//! Terminal clock binary.
//!
//! Renders the current civilian time once per second, rewriting the line
//! in place. `q`, Esc or Ctrl+C stops the clock and restores the terminal.

use std::io;
use std::time::Duration;

use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use tick_clock::{ClockConfig, ConsoleSink, SystemClock, Ticker};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        let _ = restore_terminal();
        eprintln!("tick-clock: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    execute!(io::stdout(), cursor::Hide)?;

    let ticker = Ticker::new(
        ClockConfig::default(),
        SystemClock::new(),
        ConsoleSink::stdout(),
    );
    let mut handle = ticker.start();

    // The timer thread does the rendering; this thread only watches for a
    // quit key. is_running() turns false on its own if the clock read fails.
    while handle.is_running() {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && is_quit_key(key.code, key.modifiers) {
                    break;
                }
            }
        }
    }

    let result = handle.stop();
    restore_terminal()?;
    println!();
    result?;
    Ok(())
}

fn is_quit_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn restore_terminal() -> io::Result<()> {
    execute!(io::stdout(), cursor::Show)?;
    disable_raw_mode()
}
