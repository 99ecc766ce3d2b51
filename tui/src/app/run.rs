use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, warn};
use predictor::ModelCache;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::state::form::FormState;
use crate::ui::screens::{Action, Screen};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the TUI application.
///
/// The model is loaded before the first frame is drawn, a failed load is shown on the form.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails.
pub fn run(cache: &ModelCache) -> Result<()> {
    info!("loading model from {}", cache.path().display());
    let model = cache.get();
    if let Err(e) = &model {
        warn!("predictions are disabled: {e}");
    }

    let mut screen = Screen::Form(FormState::new(model));

    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    loop {
        terminal.draw(|f| screen.draw(f))?;

        if event::poll(Duration::from_millis(120))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match screen.handle_key(k.code) {
                    Action::Quit => break,
                    Action::None => {}
                }
            }
        }
    }

    info!("quitting");
    terminal.show_cursor()?;
    Ok(())
}
