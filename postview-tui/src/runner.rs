use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use crossterm::event::EventStream;
use futures::StreamExt;
use postview_core::MountedView;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::time::MissedTickBehavior;

use crate::input::action_for_event;
use crate::render::{Labels, PostListWidget};
use crate::selection::Selection;
use crate::terminal::{StderrTerminal, TerminalModeGuard};

/// Run the post list full-screen until the user quits.
///
/// The view is redrawn whenever its state changes, on terminal input and on
/// every tick. The view is unmounted on return, which cancels a fetch that is
/// still pending.
pub async fn run(view: MountedView, labels: Labels, tick: Duration) -> Result<()> {
    if !io::stderr().is_terminal() {
        bail!("Terminal UI is unavailable: stderr is not a terminal");
    }

    let mut stderr = io::stderr();
    let mut terminal_guard = TerminalModeGuard::new("post list");
    terminal_guard.enable_raw_mode()?;
    terminal_guard.enter_alternate_screen(&mut stderr)?;

    let backend = CrosstermBackend::new(stderr);
    let mut terminal =
        Terminal::new(backend).context("Failed to initialize Ratatui terminal for post list")?;
    terminal_guard.hide_cursor(&mut terminal)?;

    let loop_result = drive(&mut terminal, &view, &labels, tick).await;

    let cleanup_result = terminal_guard.restore_with_terminal(&mut terminal);
    view.unmount();
    cleanup_result?;
    loop_result
}

async fn drive(
    terminal: &mut StderrTerminal,
    view: &MountedView,
    labels: &Labels,
    tick: Duration,
) -> Result<()> {
    let mut updates = view.subscribe();
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut selection = Selection::default();

    loop {
        let state = updates.borrow_and_update().clone();
        terminal
            .draw(|frame| {
                frame.render_widget(PostListWidget::new(&state, labels, &selection), frame.area());
            })
            .context("Failed to draw post list")?;

        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    tracing::debug!("post list state closed, leaving event loop");
                    return Ok(());
                }
            }
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        if let Some(action) = action_for_event(&event)
                            && action.apply(&mut selection, &state.posts)
                        {
                            return Ok(());
                        }
                    }
                    Some(Err(error)) => {
                        tracing::error!(%error, "terminal event stream error");
                    }
                    None => return Ok(()),
                }
            }
            _ = ticker.tick() => {}
        }
    }
}
