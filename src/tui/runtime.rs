//! Event loop for the operations console.
//!
//! The runtime is the only place where I/O happens: it reads terminal
//! events, executes [`ConsoleCmd`] values returned by the update function,
//! and draws frames. Everything else in the TUI stack is pure.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::core::errors::{OpsError, Result};

use super::model::{ConsoleCmd, ConsoleModel, ConsoleMsg};
use super::render::render_frame;
use super::terminal_guard::TerminalGuard;
use super::theme::Theme;
use super::update::update;

/// Pending toast auto-dismiss deadline.
#[derive(Debug)]
struct ToastDeadline {
    id: u64,
    due: Instant,
}

/// Run the console until the user quits.
///
/// # Errors
/// Returns [`OpsError::Terminal`] when terminal setup or event polling
/// fails, and I/O errors from persisting settings.
pub fn run(config: crate::core::config::Config) -> Result<()> {
    let _guard = TerminalGuard::new().map_err(terminal_error)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).map_err(terminal_error)?;

    let mut model = ConsoleModel::new(config, TerminalGuard::terminal_size());
    let mut deadlines: Vec<ToastDeadline> = Vec::new();
    let tick_interval = Duration::from_millis(model.config.console.refresh_interval_ms);
    let mut last_tick = Instant::now();

    while !model.quit {
        // The theme follows the effective config, so saving a contrast
        // change takes effect on the next frame.
        let theme = Theme::from_config(&model.config.display);
        terminal
            .draw(|frame| render_frame(frame, &model, &theme))
            .map_err(terminal_error)?;

        expire_due_toasts(&mut model, &mut deadlines, Instant::now());

        let timeout = poll_timeout(tick_interval.saturating_sub(last_tick.elapsed()), &deadlines);
        if event::poll(timeout).map_err(terminal_error)? {
            match event::read().map_err(terminal_error)? {
                Event::Key(key) => dispatch(&mut model, ConsoleMsg::Key(key), &mut deadlines),
                Event::Resize(cols, rows) => {
                    dispatch(&mut model, ConsoleMsg::Resize { cols, rows }, &mut deadlines);
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_interval {
            dispatch(&mut model, ConsoleMsg::Tick, &mut deadlines);
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn terminal_error(err: io::Error) -> OpsError {
    OpsError::Terminal {
        details: err.to_string(),
    }
}

/// Apply a message and execute the resulting command chain.
fn dispatch(model: &mut ConsoleModel, msg: ConsoleMsg, deadlines: &mut Vec<ToastDeadline>) {
    let cmd = update(model, msg);
    execute_cmd(model, cmd, deadlines);
}

fn execute_cmd(model: &mut ConsoleModel, cmd: ConsoleCmd, deadlines: &mut Vec<ToastDeadline>) {
    match cmd {
        ConsoleCmd::None => {}
        ConsoleCmd::Quit => model.quit = true,
        ConsoleCmd::Batch(cmds) => {
            for cmd in cmds {
                execute_cmd(model, cmd, deadlines);
            }
        }
        ConsoleCmd::ScheduleToastExpiry { id, after } => {
            deadlines.push(ToastDeadline {
                id,
                due: Instant::now() + after,
            });
        }
        ConsoleCmd::SaveSettings(config) => {
            let path = config.paths.config_file.clone();
            let (ok, detail) = match config.save(&path) {
                Ok(()) => (true, path.display().to_string()),
                Err(err) => (false, err.to_string()),
            };
            dispatch(model, ConsoleMsg::SettingsSaved { ok, detail }, deadlines);
        }
    }
}

/// Dispatch expiry messages for every toast whose deadline has passed.
fn expire_due_toasts(model: &mut ConsoleModel, deadlines: &mut Vec<ToastDeadline>, now: Instant) {
    let due: Vec<u64> = deadlines
        .iter()
        .filter(|d| d.due <= now)
        .map(|d| d.id)
        .collect();
    deadlines.retain(|d| d.due > now);
    for id in due {
        dispatch(model, ConsoleMsg::NotificationExpired(id), deadlines);
    }
}

/// Sleep until the next tick or the next toast deadline, whichever is
/// sooner, with a floor to keep input latency bounded.
fn poll_timeout(until_tick: Duration, deadlines: &[ToastDeadline]) -> Duration {
    let now = Instant::now();
    let until_toast = deadlines
        .iter()
        .map(|d| d.due.saturating_duration_since(now))
        .min();
    let timeout = match until_toast {
        Some(toast) => until_tick.min(toast),
        None => until_tick,
    };
    timeout.min(Duration::from_millis(250))
}

// ──────────────────── tests ────────────────────
