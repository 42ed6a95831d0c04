use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::cursor::{MoveToColumn, SetCursorStyle, Show};
use ratatui::crossterm::event;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

pub(crate) type StderrTerminal = Terminal<CrosstermBackend<io::Stderr>>;

/// Tracks which terminal modes were switched on so they can be undone in
/// reverse order, on the normal path or in `Drop`.
pub(crate) struct TerminalModeGuard {
    label: String,
    raw_mode_enabled: bool,
    alternate_screen: bool,
    cursor_hidden: bool,
}

impl TerminalModeGuard {
    pub(crate) fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            raw_mode_enabled: false,
            alternate_screen: false,
            cursor_hidden: false,
        }
    }

    pub(crate) fn enable_raw_mode(&mut self) -> Result<()> {
        enable_raw_mode()
            .with_context(|| format!("Failed to enable raw mode for {}", self.label))?;
        self.raw_mode_enabled = true;
        Ok(())
    }

    pub(crate) fn enter_alternate_screen(&mut self, stderr: &mut io::Stderr) -> Result<()> {
        execute!(stderr, EnterAlternateScreen)
            .with_context(|| format!("Failed to enter alternate screen for {}", self.label))?;
        self.alternate_screen = true;
        Ok(())
    }

    pub(crate) fn hide_cursor(&mut self, terminal: &mut StderrTerminal) -> Result<()> {
        terminal
            .hide_cursor()
            .with_context(|| format!("Failed to hide cursor for {}", self.label))?;
        self.cursor_hidden = true;
        Ok(())
    }

    pub(crate) fn restore_with_terminal(&mut self, terminal: &mut StderrTerminal) -> Result<()> {
        drain_pending_events();

        // Leave alternate screen first, then disable raw mode
        if self.alternate_screen {
            execute!(terminal.backend_mut(), LeaveAlternateScreen).with_context(|| {
                format!("Failed to leave alternate screen after {}", self.label)
            })?;
            self.alternate_screen = false;
        }

        if self.raw_mode_enabled {
            disable_raw_mode()
                .with_context(|| format!("Failed to disable raw mode after {}", self.label))?;
            self.raw_mode_enabled = false;
        }

        if self.cursor_hidden {
            terminal
                .show_cursor()
                .with_context(|| format!("Failed to show cursor after {}", self.label))?;
            self.cursor_hidden = false;
        }

        if let Err(error) = execute!(terminal.backend_mut(), SetCursorStyle::DefaultUserShape) {
            tracing::debug!(%error, view = %self.label, "failed to reset cursor style");
        }
        terminal.backend_mut().flush().ok();
        io::stderr().flush().ok();

        Ok(())
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        // Best-effort cleanup when the normal restore path was skipped
        if !(self.alternate_screen || self.raw_mode_enabled || self.cursor_hidden) {
            return;
        }
        drain_pending_events();

        let mut stderr = io::stderr();
        execute!(stderr, MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();

        if self.alternate_screen {
            execute!(stderr, LeaveAlternateScreen).ok();
            self.alternate_screen = false;
        }

        if self.raw_mode_enabled {
            disable_raw_mode().ok();
            self.raw_mode_enabled = false;
        }

        if self.cursor_hidden {
            execute!(stderr, SetCursorStyle::DefaultUserShape, Show).ok();
            self.cursor_hidden = false;
        }

        stderr.flush().ok();
    }
}

fn drain_pending_events() {
    while let Ok(true) = event::poll(Duration::from_millis(0)) {
        if event::read().is_err() {
            break;
        }
    }
}
