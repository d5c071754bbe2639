//! Rendering of the four main panes.

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{AppState, Pane, SettingRow, Theme};
use crate::engine::format_weight;

/// Labels on the left, settings, result and history stacked on the right.
pub fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    let columns = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let right = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SettingRow::ALL.len() as u16 + 2),
            Constraint::Min(5),
            Constraint::Percentage(35),
        ])
        .split(columns[1]);

    render_labels(f, columns[0], state);
    render_settings(f, right[0], state);
    render_result(f, right[1], state);
    render_history(f, right[2], state);
}

fn pane_block(title: String, pane: Pane, state: &AppState) -> Block<'static> {
    let border = if state.focus == pane {
        state.theme.active
    } else {
        state.theme.inactive
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(state.theme.background))
}

fn cursor_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        Style::default()
            .bg(theme.highlight_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn render_labels(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let mut title = format!(
        " Labels ({} selected / {} visible) ",
        state.session.selection().len(),
        state.visible.len()
    );
    if !state.filter.is_empty() {
        title.push_str(&format!("filter: {} ", state.filter));
    }

    let items: Vec<ListItem> = state
        .visible
        .iter()
        .map(|label| {
            let marker = if state.session.is_selected(label) {
                Span::styled("[x] ", Style::default().fg(theme.success))
            } else {
                Span::styled("[ ] ", Style::default().fg(theme.text_muted))
            };
            ListItem::new(Line::from(vec![
                marker,
                Span::styled(label.as_str(), Style::default().fg(theme.text)),
            ]))
        })
        .collect();

    let block = pane_block(title, Pane::Labels, state);
    if items.is_empty() {
        let empty = Paragraph::new("No labels match")
            .style(Style::default().fg(theme.text_muted))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(cursor_style(theme, state.focus == Pane::Labels));
    let mut list_state = ListState::default().with_selected(Some(state.label_cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_settings(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let settings = state.session.settings();
    let focused = state.focus == Pane::Settings;

    let lines: Vec<Line> = SettingRow::ALL
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let value = match row {
                SettingRow::MinWeight => format_weight(settings.min_weight),
                SettingRow::MaxWeight => format_weight(settings.max_weight),
                SettingRow::Distribution => settings.distribution.label().to_string(),
                SettingRow::Prefix => settings.prefix.label().to_string(),
                SettingRow::MinTags => settings.min_tags.to_string(),
                SettingRow::MaxTags => settings.max_tags.to_string(),
            };
            let style = if focused && i == state.setting_cursor {
                cursor_style(theme, true)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(format!("{:<16}", row.label()), Style::default().fg(theme.text_muted)),
                Span::styled(format!("< {value} >"), Style::default().fg(theme.text)),
            ])
            .style(style)
        })
        .collect();

    let title = format!(" Settings (tags up to {}) ", state.session.tag_count_limit());
    let paragraph = Paragraph::new(lines).block(pane_block(title, Pane::Settings, state));
    f.render_widget(paragraph, area);
}

fn render_result(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let mut title = " Result ".to_string();
    if state.copy_feedback.is_active(Instant::now()) {
        title.push_str("- Copied! ");
    }

    let body = match (&state.result_notice, state.session.current()) {
        (Some(notice), _) => Paragraph::new(notice.as_str()).style(Style::default().fg(theme.warning)),
        (None, Some(result)) => Paragraph::new(result).style(Style::default().fg(theme.text)),
        (None, None) => Paragraph::new("Press g to generate a combination")
            .style(Style::default().fg(theme.text_muted)),
    };

    f.render_widget(
        body.wrap(Wrap { trim: false })
            .block(pane_block(title, Pane::Result, state)),
        area,
    );
}

fn render_history(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let history = state.session.history();
    let title = format!(" History ({}/{}) ", history.len(), history.capacity());

    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(theme.text_muted)),
                Span::styled(entry, Style::default().fg(theme.text)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(pane_block(title, Pane::History, state))
        .highlight_style(cursor_style(theme, state.focus == Pane::History));
    let mut list_state = ListState::default()
        .with_selected((!history.is_empty()).then_some(state.history_cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}
