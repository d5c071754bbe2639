//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod clipboard;
pub mod component;
pub mod handlers;
pub mod help_overlay;
pub mod panes;
pub mod status_bar;
pub mod text_input;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::session::Session;
use crate::shortcuts::ShortcutRegistry;

// Re-export TUI components
pub use clipboard::CopyFeedback;
pub use component::Component;
pub use help_overlay::HelpOverlayState;
pub use status_bar::StatusBar;
pub use text_input::{InputPurpose, TextInput, TextInputEvent};
pub use theme::Theme;

/// Focusable panes, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// Label list with selection markers
    Labels,
    /// Generator settings
    Settings,
    /// Current result
    Result,
    /// Past results
    History,
}

impl Pane {
    const ORDER: [Self; 4] = [Self::Labels, Self::Settings, Self::Result, Self::History];

    /// Next pane, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|p| *p == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    /// Previous pane, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        let index = Self::ORDER.iter().position(|p| *p == self).unwrap_or(0);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Rows of the settings pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingRow {
    /// Lower weight bound
    MinWeight,
    /// Upper weight bound
    MaxWeight,
    /// Weight distribution
    Distribution,
    /// `artist:` prefix policy
    Prefix,
    /// Minimum tag count
    MinTags,
    /// Maximum tag count
    MaxTags,
}

impl SettingRow {
    /// Rows in display order.
    pub const ALL: [Self; 6] = [
        Self::MinWeight,
        Self::MaxWeight,
        Self::Distribution,
        Self::Prefix,
        Self::MinTags,
        Self::MaxTags,
    ];

    /// Row caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MinWeight => "Min weight",
            Self::MaxWeight => "Max weight",
            Self::Distribution => "Distribution",
            Self::Prefix => "artist: prefix",
            Self::MinTags => "Min tags",
            Self::MaxTags => "Max tags",
        }
    }
}

/// Active popup
#[derive(Debug, Clone)]
pub enum PopupType {
    /// Text prompt (filter, add, import, export)
    TextInput(TextInput),
    /// Shortcut reference
    Help(HelpOverlayState),
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Labels, selection, settings, history and current result
    pub session: Session,
    /// Application configuration
    pub config: Config,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Key bindings
    pub shortcuts: ShortcutRegistry,
    /// Focused pane
    pub focus: Pane,
    /// Label filter text
    pub filter: String,
    /// Labels matching the filter, in store order
    pub visible: Vec<String>,
    /// Cursor in the visible label list
    pub label_cursor: usize,
    /// Cursor in the settings pane
    pub setting_cursor: usize,
    /// Cursor in the history pane
    pub history_cursor: usize,
    /// Inline notice shown in the result pane instead of a result
    pub result_notice: Option<String>,
    /// Currently active popup (if any)
    pub active_popup: Option<PopupType>,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,
    /// "Copied!" acknowledgement
    pub copy_feedback: CopyFeedback,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState` around a session.
    #[must_use]
    pub fn new(session: Session, config: Config) -> Self {
        let mut state = Self {
            session,
            theme: Theme::from_mode(config.ui.theme_mode),
            config,
            shortcuts: ShortcutRegistry::new(),
            focus: Pane::Labels,
            filter: String::new(),
            visible: Vec::new(),
            label_cursor: 0,
            setting_cursor: 0,
            history_cursor: 0,
            result_notice: None,
            active_popup: None,
            status_message: String::new(),
            error_message: None,
            copy_feedback: CopyFeedback::default(),
            should_quit: false,
        };
        state.refresh_visible();
        if state.config.ui.show_help_on_startup {
            state.open_help_overlay();
        }
        state
    }

    /// Recomputes the visible labels after a filter or label change.
    pub fn refresh_visible(&mut self) {
        self.visible = self
            .session
            .labels()
            .search(&self.filter)
            .map(str::to_string)
            .collect();
        self.label_cursor = self.label_cursor.min(self.visible.len().saturating_sub(1));
    }

    /// Replaces the filter and refreshes the list.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.label_cursor = 0;
        self.refresh_visible();
    }

    /// Label under the cursor.
    #[must_use]
    pub fn label_at_cursor(&self) -> Option<&str> {
        self.visible.get(self.label_cursor).map(String::as_str)
    }

    /// Setting row under the cursor.
    #[must_use]
    pub fn setting_at_cursor(&self) -> SettingRow {
        SettingRow::ALL[self.setting_cursor.min(SettingRow::ALL.len() - 1)]
    }

    /// Moves the focused setting by `delta` steps.
    ///
    /// Weights move on the 0.05 grid within 0..=3, modes cycle, and tag
    /// counts stay within 1..=`tag_count_limit` with min <= max kept.
    pub fn adjust_setting(&mut self, delta: i32) {
        let limit = self.session.tag_count_limit();
        let row = self.setting_at_cursor();
        let settings = self.session.settings_mut();

        match row {
            SettingRow::MinWeight => settings.step_min_weight(delta),
            SettingRow::MaxWeight => settings.step_max_weight(delta),
            SettingRow::Distribution => {
                settings.distribution = if delta >= 0 {
                    settings.distribution.next()
                } else {
                    settings.distribution.previous()
                };
            }
            SettingRow::Prefix => {
                settings.prefix = if delta >= 0 {
                    settings.prefix.next()
                } else {
                    settings.prefix.previous()
                };
            }
            SettingRow::MinTags => settings.set_min_tags(step_count(settings.min_tags, delta, limit)),
            SettingRow::MaxTags => settings.set_max_tags(step_count(settings.max_tags, delta, limit)),
        }
    }

    /// Number of rows in the focused pane.
    #[must_use]
    pub fn focused_len(&self) -> usize {
        match self.focus {
            Pane::Labels => self.visible.len(),
            Pane::Settings => SettingRow::ALL.len(),
            Pane::Result => 0,
            Pane::History => self.session.history().len(),
        }
    }

    /// Mutable cursor of the focused pane.
    pub fn focused_cursor_mut(&mut self) -> Option<&mut usize> {
        match self.focus {
            Pane::Labels => Some(&mut self.label_cursor),
            Pane::Settings => Some(&mut self.setting_cursor),
            Pane::Result => None,
            Pane::History => Some(&mut self.history_cursor),
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Opens the shared text prompt.
    pub fn open_text_input(&mut self, purpose: InputPurpose, initial: impl Into<String>) {
        self.active_popup = Some(PopupType::TextInput(TextInput::new(purpose, initial)));
    }

    /// Opens the help overlay.
    pub fn open_help_overlay(&mut self) {
        self.active_popup = Some(PopupType::Help(HelpOverlayState::new(&self.shortcuts)));
    }

    /// Closes any popup.
    pub fn close_popup(&mut self) {
        self.active_popup = None;
    }
}

/// Steps a tag count, clamping only in the direction of travel so a value
/// above `limit` (e.g. loaded from the config) is never lowered by an increase.
fn step_count(current: usize, delta: i32, limit: usize) -> usize {
    let step = delta.unsigned_abs() as usize;
    if delta >= 0 {
        current.saturating_add(step).min(limit.max(current)).max(1)
    } else {
        current.saturating_sub(step).max(1)
    }
}

/// Loads the session described by `config` and runs the TUI until quit.
pub fn run(config: Config) -> Result<()> {
    let session = Session::from_config(&config)?;
    let mut state = AppState::new(session, config);

    let mut terminal = setup_terminal()?;
    let result = run_tui(&mut state, &mut terminal);
    restore_terminal(terminal)?;

    info!(
        generated = state.session.history().len(),
        "interactive session ended"
    );
    result
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        state.copy_feedback.tick(Instant::now());

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    panes::render_main_content(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, &state.theme);

    let area = f.area();
    match &state.active_popup {
        Some(PopupType::TextInput(input)) => input.render(f, area, &state.theme),
        Some(PopupType::Help(help)) => help.render(f, area, &state.theme, &state.shortcuts),
        None => {}
    }

    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render title bar with counts
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(
        " {APP_NAME}  |  {} labels  |  {} selected  |  {} in history",
        state.session.labels().len(),
        state.session.selection().len(),
        state.session.history().len()
    );

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(60, 30, f.area());

    f.render_widget(Clear, area);

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text).bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Error ")
                .style(Style::default().fg(theme.error).bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[0]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ]))
    .style(Style::default().fg(theme.text).bg(theme.background));
    f.render_widget(help, chunks[1]);
}

/// Helper to create a centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::KeyCode;

    // Error overlay swallows input until dismissed
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        return Ok(false);
    }

    if state.active_popup.is_some() {
        return handlers::handle_popup_input(state, key);
    }

    handlers::handle_main_input(state, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;
    use crate::models::{GeneratorSettings, LabelStore, PrefixMode, WeightDistribution};

    fn test_state(labels: &[&str]) -> AppState {
        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Dark;
        let session = Session::new(LabelStore::from_labels(labels), GeneratorSettings::default());
        AppState::new(session, config)
    }

    #[test]
    fn test_pane_cycle() {
        assert_eq!(Pane::Labels.next(), Pane::Settings);
        assert_eq!(Pane::History.next(), Pane::Labels);
        assert_eq!(Pane::Labels.previous(), Pane::History);
    }

    #[test]
    fn test_filter_refreshes_visible_and_clamps_cursor() {
        let mut state = test_state(&["monet", "degas", "manet"]);
        state.label_cursor = 2;
        state.set_filter("NET");

        assert_eq!(state.visible, ["manet", "monet"]);
        assert_eq!(state.label_cursor, 0);

        state.label_cursor = 1;
        state.session.remove_label("monet");
        state.refresh_visible();
        assert_eq!(state.label_cursor, 0);
    }

    #[test]
    fn test_adjust_weight_rows() {
        let mut state = test_state(&[]);
        state.setting_cursor = 0;
        state.adjust_setting(1);
        assert!((state.session.settings().min_weight - 0.1).abs() < 1e-9);

        state.setting_cursor = 1;
        state.adjust_setting(-1);
        assert!((state.session.settings().max_weight - 1.45).abs() < 1e-9);
    }

    #[test]
    fn test_adjust_mode_rows_cycle() {
        let mut state = test_state(&[]);
        state.setting_cursor = 2;
        state.adjust_setting(-1);
        assert_eq!(state.session.settings().distribution, WeightDistribution::Normal);

        state.setting_cursor = 3;
        state.adjust_setting(1);
        assert_eq!(state.session.settings().prefix, PrefixMode::All);
    }

    #[test]
    fn test_adjust_tag_rows_respect_limit_and_order() {
        let mut state = test_state(&["a", "b"]);
        state.setting_cursor = 4;
        for _ in 0..30 {
            state.adjust_setting(1);
        }
        assert_eq!(state.session.settings().min_tags, 20);
        assert_eq!(state.session.settings().max_tags, 20);

        state.setting_cursor = 5;
        for _ in 0..30 {
            state.adjust_setting(-1);
        }
        assert_eq!(state.session.settings().max_tags, 1);
        assert_eq!(state.session.settings().min_tags, 1);
    }

    #[test]
    fn test_step_count_bounds() {
        assert_eq!(step_count(1, -1, 20), 1);
        assert_eq!(step_count(20, 1, 20), 20);
        assert_eq!(step_count(5, 2, 20), 7);
        assert_eq!(step_count(25, 1, 20), 25);
        assert_eq!(step_count(25, -1, 20), 24);
    }

    #[test]
    fn test_increase_never_lowers_count_above_limit() {
        let mut state = test_state(&["a"]);
        state.session.settings_mut().set_max_tags(30);
        state.setting_cursor = 5;

        state.adjust_setting(1);
        assert_eq!(state.session.settings().max_tags, 30);

        state.adjust_setting(-1);
        assert_eq!(state.session.settings().max_tags, 29);
    }
}
