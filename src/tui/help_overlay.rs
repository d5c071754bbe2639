//! Help overlay listing every keyboard shortcut.
//!
//! Content is built from the [`ShortcutRegistry`], grouped into sections.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use super::Theme;
use crate::constants::APP_NAME;
use crate::shortcuts::{Action, ShortcutRegistry};

const SECTIONS: [(&str, &[Action]); 5] = [
    (
        "Navigation",
        &[
            Action::FocusNext,
            Action::FocusPrevious,
            Action::NavigateUp,
            Action::NavigateDown,
            Action::JumpToFirst,
            Action::JumpToLast,
        ],
    ),
    (
        "Labels",
        &[
            Action::Activate,
            Action::SelectVisible,
            Action::DeselectAll,
            Action::Search,
            Action::AddLabel,
            Action::ImportFile,
            Action::ExportFile,
        ],
    ),
    (
        "Settings",
        &[Action::NavigateLeft, Action::NavigateRight],
    ),
    ("Generation", &[Action::Generate, Action::CopyResult]),
    (
        "General",
        &[Action::ToggleHelp, Action::Cancel, Action::Quit],
    ),
];

/// State for the help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlayState {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    /// Total number of content lines
    total_lines: usize,
}

impl HelpOverlayState {
    /// Creates a new help overlay state.
    #[must_use]
    pub fn new(registry: &ShortcutRegistry) -> Self {
        let total_lines = Self::get_help_content(registry, &Theme::dark()).len();
        Self {
            scroll_offset: 0,
            total_lines,
        }
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to the top.
    pub const fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll to the bottom.
    pub const fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.total_lines.saturating_sub(1);
    }

    fn get_help_content(registry: &ShortcutRegistry, theme: &Theme) -> Vec<Line<'static>> {
        let heading = Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD);
        let key_style = Style::default().fg(theme.accent);

        let mut lines = vec![
            Line::from(Span::styled(APP_NAME, heading)),
            Line::from("Pick labels, tune the panel, press g to combine."),
        ];

        for (title, actions) in SECTIONS {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(title, heading)));
            for action in actions {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<18}", registry.keys_for(*action)), key_style),
                    Span::raw(action.description()),
                ]));
            }
        }

        lines
    }

    /// Render the overlay centered in `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, registry: &ShortcutRegistry) {
        let width = (area.width * 60) / 100;
        let height = (area.height * 80) / 100;
        let modal_area = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let content = Self::get_help_content(registry, theme);
        let visible_height = chunks[0].height.saturating_sub(2) as usize;

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .title(" Help - Keyboard Shortcuts ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .style(Style::default().fg(theme.text).bg(theme.background))
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, chunks[0]);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .style(Style::default().fg(theme.primary));
        let mut scrollbar_state = ScrollbarState::new(self.total_lines.saturating_sub(visible_height))
            .position(self.scroll_offset);
        frame.render_stateful_widget(scrollbar, chunks[1], &mut scrollbar_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_action_is_documented() {
        let documented: Vec<Action> = SECTIONS
            .iter()
            .flat_map(|(_, actions)| actions.iter().copied())
            .collect();
        for action in Action::ALL {
            assert!(documented.contains(&action), "{} missing from help", action.id());
        }
    }

    #[test]
    fn test_scrolling_is_bounded() {
        let registry = ShortcutRegistry::new();
        let mut help = HelpOverlayState::new(&registry);

        help.scroll_up();
        assert_eq!(help.scroll_offset, 0);

        help.scroll_to_bottom();
        let bottom = help.scroll_offset;
        help.scroll_down();
        assert_eq!(help.scroll_offset, bottom);

        help.scroll_to_top();
        assert_eq!(help.scroll_offset, 0);
    }
}
