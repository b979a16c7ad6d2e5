//! Terminal lifecycle for the board TUI

use std::io::{self, Stdout};

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::core::error::Result;

pub type BoardTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen, returning a ready terminal
pub fn init() -> Result<BoardTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Leave the alternate screen and raw mode
///
/// Safe to call even if `init` failed partway; call it on every exit
/// path so the shell is usable afterwards.
pub fn restore() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
