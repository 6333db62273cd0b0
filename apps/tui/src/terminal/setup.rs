use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout, Write};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode plus the alternate screen. A failed step rolls back the ones
/// before it so the shell is never left half configured.
pub fn setup_terminal() -> Result<Tui> {
    if let Ok((width, height)) = crossterm::terminal::size() {
        tracing::debug!(width, height, "setting up terminal");
    }

    enable_raw_mode().wrap_err("Failed to enable raw mode")?;

    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        cleanup_terminal_state(true, false);
        return Err(e).wrap_err("Failed to enter alternate screen");
    }

    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout())) {
        Ok(terminal) => terminal,
        Err(e) => {
            cleanup_terminal_state(true, true);
            return Err(e).wrap_err("Failed to create terminal");
        }
    };

    if let Err(e) = terminal.clear() {
        tracing::warn!("failed to clear terminal: {e}");
    }
    if let Err(e) = terminal.hide_cursor() {
        tracing::warn!("failed to hide cursor: {e}");
    }

    Ok(terminal)
}

/// Undo whichever parts of `setup_terminal` took effect. Each step is
/// attempted even if an earlier one fails.
pub fn cleanup_terminal_state(raw_mode: bool, alternate_screen: bool) {
    let mut out = stdout();

    let steps = [
        ("show cursor", execute!(out, cursor::Show)),
        (
            "leave alternate screen",
            if alternate_screen {
                execute!(out, LeaveAlternateScreen)
            } else {
                Ok(())
            },
        ),
        (
            "disable raw mode",
            if raw_mode { disable_raw_mode() } else { Ok(()) },
        ),
    ];

    for (step, result) in steps {
        if let Err(e) = result {
            tracing::warn!("failed to {step}: {e}");
        }
    }

    let _ = execute!(out, cursor::MoveToNextLine(1));
    let _ = out.flush();

    tracing::debug!("terminal restored");
}
