//! Raw mode + alternate screen, restored on drop

use std::io;

use anyhow::Context;
use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};

/// Holds the terminal in game mode until dropped
///
/// Dropping runs on early `?` returns and while unwinding a panic, so the
/// user's shell is never left in raw mode.
pub struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    pub fn enter() -> anyhow::Result<Self> {
        enable_raw_mode().context("enable raw mode")?;
        let guard = Self { restore: restore_terminal };
        execute!(io::stdout(), EnterAlternateScreen).context("enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            log::warn!("terminal restore failed: {}", e);
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}
