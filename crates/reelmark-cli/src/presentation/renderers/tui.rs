use anyhow::Result;
use crossterm::{
    event::KeyEvent,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

use crate::presentation::view_models::TuiScreenViewModel;
use crate::presentation::views::tui::components::{BrowseAction, BrowserComponent};

/// Full-screen renderer of the interactive browser
///
/// Owns the terminal and the page component. The terminal is restored on
/// drop and on Ctrl+C delivered as a signal.
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    browser: BrowserComponent,
}

impl TuiRenderer {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Raw mode swallows SIGINT; this only fires if a signal still arrives
        ctrlc::set_handler(move || {
            restore_terminal();
            std::process::exit(0);
        })?;

        Ok(Self {
            terminal,
            browser: BrowserComponent::new(),
        })
    }

    pub fn draw(&mut self, screen: &TuiScreenViewModel) -> Result<()> {
        let browser = &mut self.browser;
        self.terminal.draw(|f| {
            let area = f.area();
            browser.render(f, area, screen);
        })?;
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent, screen: &TuiScreenViewModel) -> Option<BrowseAction> {
        self.browser.handle_input(key, screen)
    }
}

impl Drop for TuiRenderer {
    fn drop(&mut self) {
        restore_terminal();
        let _ = self.terminal.show_cursor();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
