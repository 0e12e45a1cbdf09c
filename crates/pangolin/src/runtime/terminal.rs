use std::io;

use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::runtime::TuiTerminal;

/// Owns the raw-mode/alternate-screen session and restores the terminal on
/// all exit paths.
///
/// The event loop uses `?` extensively. Without this guard, any early return
/// after [`TerminalGuard::enter`] can leave the user's shell in a broken
/// state. Keeping cleanup in `Drop` guarantees restore runs during normal
/// exit, runtime errors, and unwinding panics.
pub(crate) struct TerminalGuard;

impl TerminalGuard {
    /// Enables raw mode, enters the alternate screen, and hands back the
    /// terminal together with the guard that undoes both.
    pub(crate) fn enter() -> io::Result<(Self, TuiTerminal)> {
        enable_raw_mode()?;
        let guard = Self;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok((guard, terminal))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = disable_raw_mode();
        let _ = execute!(stdout, LeaveAlternateScreen, Show);
    }
}
