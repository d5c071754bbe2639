//! Single-line text input popup.
//!
//! One dialog serves every prompt in the app; [`InputPurpose`] decides the
//! title, the hint and what the parent does with the confirmed text.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{centered_rect, Component, Theme};

/// What the entered text is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPurpose {
    /// Live label filter
    Search,
    /// New label to add
    AddLabel,
    /// File to import labels from
    ImportPath,
    /// File to export labels to
    ExportPath,
}

impl InputPurpose {
    const fn title(self) -> &'static str {
        match self {
            Self::Search => " Filter Labels ",
            Self::AddLabel => " Add Label ",
            Self::ImportPath => " Import Labels ",
            Self::ExportPath => " Export Labels ",
        }
    }

    const fn hint(self) -> &'static str {
        match self {
            Self::Search => "Case-insensitive; matches anywhere in the label",
            Self::AddLabel => "The new label is selected right away",
            Self::ImportPath => "Text file; labels separated by commas or newlines",
            Self::ExportPath => "One label per line",
        }
    }
}

/// Events emitted by the text input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputEvent {
    /// Buffer changed (only reported for live purposes)
    Changed(String),
    /// User confirmed the text
    Confirmed(String),
    /// User cancelled the operation
    Cancelled,
}

/// Text input component state
#[derive(Debug, Clone)]
pub struct TextInput {
    purpose: InputPurpose,
    input: String,
    /// Value before editing started, restored on cancel for live purposes
    original: String,
}

impl TextInput {
    /// Creates an input prefilled with `initial`.
    #[must_use]
    pub fn new(purpose: InputPurpose, initial: impl Into<String>) -> Self {
        let input = initial.into();
        Self {
            purpose,
            original: input.clone(),
            input,
        }
    }

    /// Purpose of this prompt.
    #[must_use]
    pub const fn purpose(&self) -> InputPurpose {
        self.purpose
    }

    /// Current buffer.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.input
    }

    /// Value before editing started.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    fn changed(&self) -> Option<TextInputEvent> {
        (self.purpose == InputPurpose::Search).then(|| TextInputEvent::Changed(self.input.clone()))
    }
}

impl Component for TextInput {
    type Event = TextInputEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.clear();
                self.changed()
            }
            KeyCode::Char(c)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                self.input.push(c);
                self.changed()
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.changed()
            }
            KeyCode::Enter => Some(TextInputEvent::Confirmed(self.input.clone())),
            KeyCode::Esc => Some(TextInputEvent::Cancelled),
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(60, 30, area);

        frame.render_widget(Clear, dialog_area);
        let background = Block::default()
            .borders(Borders::ALL)
            .title(self.purpose.title())
            .style(Style::default().fg(theme.accent).bg(theme.background));
        let inner = background.inner(dialog_area);
        frame.render_widget(background, dialog_area);

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input field
                Constraint::Length(1), // Hint
                Constraint::Min(0),
                Constraint::Length(1), // Help text
            ])
            .split(inner);

        let input = Paragraph::new(format!("{}█", self.input))
            .style(Style::default().fg(theme.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().fg(theme.primary).bg(theme.background)),
            );
        frame.render_widget(input, chunks[0]);

        let hint = Paragraph::new(self.purpose.hint()).style(Style::default().fg(theme.text_muted));
        frame.render_widget(hint, chunks[1]);

        let key_style = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);
        let help = Paragraph::new(Line::from(vec![
            Span::styled("Enter", key_style),
            Span::raw(" Confirm  "),
            Span::styled("Esc", key_style),
            Span::raw(" Cancel  "),
            Span::styled("Ctrl+U", key_style),
            Span::raw(" Clear"),
        ]))
        .style(Style::default().fg(theme.text));
        frame.render_widget(help, chunks[3]);
    }
}
