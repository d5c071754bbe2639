//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Pane, Theme};
use crate::shortcuts::Action;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: message line on top, key hints below.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let message_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.as_str()),
            ])
        } else if !state.status_message.is_empty() {
            Line::from(state.status_message.as_str())
        } else {
            Line::from(Span::styled(
                format!(
                    "{} labels, {} selected",
                    state.session.labels().len(),
                    state.session.selection().len()
                ),
                Style::default().fg(theme.text_muted),
            ))
        };

        let status = Paragraph::new(vec![message_line, Self::hints_line(state, theme)])
            .style(Style::default().fg(theme.text).bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Hints relevant to the focused pane.
    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let contextual: &[Action] = match state.focus {
            Pane::Labels => &[Action::Activate, Action::Search, Action::SelectVisible, Action::AddLabel],
            Pane::Settings => &[Action::NavigateLeft, Action::NavigateRight],
            Pane::Result => &[Action::CopyResult],
            Pane::History => &[Action::Activate],
        };
        let common = [Action::Generate, Action::FocusNext, Action::ToggleHelp, Action::Quit];

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, action) in contextual.iter().chain(common.iter()).enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                state.shortcuts.keys_for(*action),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                Self::short_label(*action, state.focus),
                Style::default().fg(theme.text_muted),
            ));
        }

        Line::from(spans)
    }

    const fn short_label(action: Action, focus: Pane) -> &'static str {
        match (action, focus) {
            (Action::Activate, Pane::History) => "Use entry",
            (Action::Activate, _) => "Toggle",
            (Action::Search, _) => "Filter",
            (Action::SelectVisible, _) => "Select visible",
            (Action::AddLabel, _) => "Add",
            (Action::NavigateLeft, _) => "Decrease",
            (Action::NavigateRight, _) => "Increase",
            (Action::CopyResult, _) => "Copy",
            (Action::Generate, _) => "Generate",
            (Action::FocusNext, _) => "Next pane",
            (Action::ToggleHelp, _) => "Help",
            (Action::Quit, _) => "Quit",
            _ => "",
        }
    }
}
