pub mod keys;
pub mod render;
pub mod theme;

pub use keys::map_key;
pub use render::Renderer;
pub use theme::Theme;

use crate::wizard::Wizard;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::Duration;

const POLL_INTERVAL_MS: u64 = 250;

/// Main TUI application: feeds terminal keys to the wizard until it finishes
pub struct TuiApp {
    wizard: Wizard,
    renderer: Renderer,
    poll_interval: Duration,
}

impl TuiApp {
    pub fn new(renderer: Renderer) -> Self {
        Self {
            wizard: Wizard::new(),
            renderer,
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
        }
    }

    /// Run until the wizard is submitted or aborted, returning the finished wizard
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> io::Result<Wizard> {
        loop {
            terminal.draw(|f| self.renderer.draw(f, &self.wizard))?;

            if self.wizard.is_finished() {
                break;
            }

            if event::poll(self.poll_interval)? {
                if let Event::Key(key) = event::read()? {
                    if let Some(wizard_event) = map_key(key, self.wizard.is_typing()) {
                        self.wizard.handle(wizard_event);
                    }
                }
            }
        }

        log::debug!("[tui] run_finished: status={:?}", self.wizard.status());
        Ok(self.wizard)
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }
}

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal after TUI mode
pub fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
