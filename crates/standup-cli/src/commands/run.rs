//! Run command: the interactive countdown dashboard.

use std::io::{self, Stdout};
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use standup_core::{Clock, SystemClock};

use crate::dashboard::Dashboard;
use crate::meeting::Meeting;
use crate::{keymap, ui};

/// Screen refresh interval (60 per second).
const TICK_RATE: Duration = Duration::from_nanos(1_000_000_000 / 60);

pub fn run(meeting: Meeting) -> Result<()> {
    let mut dashboard = Dashboard::new(meeting, SystemClock);

    let mut terminal = setup_terminal().context("failed to set up terminal")?;
    install_panic_hook();
    tracing::info!("dashboard started");

    let result = event_loop(&mut terminal, &mut dashboard);
    restore_terminal(&mut terminal).context("failed to restore terminal")?;

    tracing::info!("dashboard closed");
    result
}

/// Redraws every tick and dispatches key presses until a quit action.
fn event_loop<B: Backend, C: Clock>(
    terminal: &mut Terminal<B>,
    dashboard: &mut Dashboard<C>,
) -> Result<()> {
    let mut last_tick = Instant::now();
    loop {
        dashboard.tick();
        terminal.draw(|frame| ui::draw(frame, dashboard))?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = keymap::action_for(&key) {
                    if let ControlFlow::Break(()) = dashboard.apply(action) {
                        return Ok(());
                    }
                }
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
        }
    }
}

/// Switches to raw mode and the alternate screen.
///
/// If anything after raw mode fails, the terminal is put back before the
/// error is returned.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let terminal = undo_on_error(
        execute!(io::stdout(), EnterAlternateScreen)
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout()))),
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        },
    )?;
    Ok(terminal)
}

/// Runs `undo` when `attempt` failed, then passes the result through.
fn undo_on_error<T>(attempt: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if attempt.is_err() {
        tracing::warn!("terminal setup failed, restoring terminal");
        undo();
    }
    attempt
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Leaves the alternate screen before the panic message is printed.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        previous(info);
    }));
}
