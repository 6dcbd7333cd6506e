// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Browser state and event loop.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use plugdex_catalog::{Catalog, RepositoryIndex};
use plugdex_config::PlugdexConfig;
use plugdex_core::{PlugdexError, PluginRecord};
use plugdex_render::overlay::{OverlaySlot, ESCAPE_KEY};
use ratatui::backend::CrosstermBackend;
use ratatui::widgets::ListState;
use ratatui::Terminal;
use tracing::debug;

use super::debounce::Debouncer;
use super::ui;
use crate::data::LoadedCatalog;

/// How long to wait for a terminal event before redrawing.
const EVENT_POLL: Duration = Duration::from_millis(16);

/// Application state
pub struct App {
    pub catalog: Catalog,
    pub index: RepositoryIndex,
    /// List selection and scroll offset
    pub list_state: ListState,
    /// Search text as typed; applied to the catalog after the debounce window
    input: String,
    /// Id of the plugin whose detail popup is open
    overlay: OverlaySlot<String>,
    debouncer: Debouncer,
    should_quit: bool,
}

impl App {
    pub fn new(loaded: LoadedCatalog, debounce: Duration) -> Self {
        let mut app = Self {
            input: loaded.catalog.term().to_string(),
            catalog: loaded.catalog,
            index: loaded.index,
            list_state: ListState::default(),
            overlay: OverlaySlot::new(),
            debouncer: Debouncer::new(debounce),
            should_quit: false,
        };
        app.reset_selection();
        app
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True while typed text has not yet been applied.
    pub fn search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn selected_record(&self) -> Option<&PluginRecord> {
        self.list_state
            .selected()
            .and_then(|pos| self.catalog.view_get(pos))
    }

    /// The record shown in the detail popup, if one is open.
    pub fn detail_record(&self) -> Option<&PluginRecord> {
        self.overlay.current().and_then(|id| self.catalog.find(id))
    }

    /// Apply a pending search once the debounce window has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.debouncer.poll(now) {
            debug!(term = %self.input, "applying search");
            self.catalog.set_search(&self.input);
            self.reset_selection();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => self.should_quit = true,
            (KeyCode::Esc, _) => {
                if !self.overlay.handle_key(ESCAPE_KEY) {
                    self.should_quit = true;
                }
            }
            (KeyCode::Tab, _) => self.cycle_sort(),
            (KeyCode::Up, _) => self.select_prev(),
            (KeyCode::Down, _) => self.select_next(),
            (KeyCode::Enter, _) => self.open_selected(),
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.input.clear();
                self.debouncer.input(now);
            }
            (KeyCode::Backspace, _) => {
                if self.input.pop().is_some() {
                    self.debouncer.input(now);
                }
            }
            (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
                self.debouncer.input(now);
            }
            _ => {}
        }
    }

    fn cycle_sort(&mut self) {
        let next = self.catalog.sort().next();
        self.catalog.set_sort(next);
        self.reset_selection();
    }

    fn open_selected(&mut self) {
        if let Some(id) = self.selected_record().map(|r| r.id.clone()) {
            self.overlay.open(id);
        }
    }

    fn select_prev(&mut self) {
        let current = self.list_state.selected().unwrap_or(0);
        if current > 0 {
            self.list_state.select(Some(current - 1));
        }
    }

    fn select_next(&mut self) {
        let current = self.list_state.selected().unwrap_or(0);
        if current + 1 < self.catalog.visible_len() {
            self.list_state.select(Some(current + 1));
        }
    }

    fn reset_selection(&mut self) {
        let first = (self.catalog.visible_len() > 0).then_some(0);
        self.list_state.select(first);
    }
}

/// Run the browser until the user quits.
///
/// The terminal is restored when this returns, on error, and while
/// unwinding from a panic.
pub fn run(loaded: LoadedCatalog, config: &PlugdexConfig) -> Result<(), PlugdexError> {
    let _restore = RestoreGuard::new(restore_terminal);
    enable_raw_mode().map_err(terminal_error)?;
    execute!(io::stdout(), EnterAlternateScreen).map_err(terminal_error)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).map_err(terminal_error)?;

    let mut app = App::new(loaded, Duration::from_millis(config.display.debounce_ms));

    run_loop(&mut terminal, &mut app)
}

/// Runs its closure once when dropped.
struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Leave raw mode and the alternate screen. Failures are ignored; there is
/// nothing left to report them to.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<(), PlugdexError> {
    loop {
        app.tick(Instant::now());

        terminal
            .draw(|f| ui::render(f, app))
            .map_err(terminal_error)?;

        if event::poll(EVENT_POLL).map_err(terminal_error)?
            && let Event::Key(key) = event::read().map_err(terminal_error)?
        {
            app.handle_key(key, Instant::now());
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

fn terminal_error(e: io::Error) -> PlugdexError {
    PlugdexError::Internal(format!("terminal error: {e}"))
}
