//! Action dispatch for the main screen.

use std::time::Instant;

use anyhow::Result;

use crate::constants::EXPORT_FILE_NAME;
use crate::shortcuts::Action;
use crate::tui::{clipboard, AppState, InputPurpose, Pane};

/// Dispatch action to appropriate handler
///
/// Returns `Ok(true)` when the application should exit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        // Navigation
        Action::NavigateUp => move_cursor(state, -1),
        Action::NavigateDown => move_cursor(state, 1),
        Action::NavigateLeft => adjust_focused_setting(state, -1),
        Action::NavigateRight => adjust_focused_setting(state, 1),
        Action::JumpToFirst => jump_to(state, false),
        Action::JumpToLast => jump_to(state, true),
        Action::FocusNext => {
            state.focus = state.focus.next();
            Ok(false)
        }
        Action::FocusPrevious => {
            state.focus = state.focus.previous();
            Ok(false)
        }

        // Selection
        Action::Activate => handle_activate(state),
        Action::SelectVisible => {
            let count = state.session.select_visible(&state.filter);
            state.set_status(format!("Selected {count} labels"));
            Ok(false)
        }
        Action::DeselectAll => {
            state.session.deselect_all();
            state.set_status("Selection cleared");
            Ok(false)
        }

        // Generation
        Action::Generate => handle_generate(state),
        Action::CopyResult => handle_copy_result(state),

        // Prompts
        Action::Search => {
            let filter = state.filter.clone();
            state.open_text_input(InputPurpose::Search, filter);
            Ok(false)
        }
        Action::AddLabel => {
            state.open_text_input(InputPurpose::AddLabel, "");
            Ok(false)
        }
        Action::ImportFile => {
            state.open_text_input(InputPurpose::ImportPath, "");
            Ok(false)
        }
        Action::ExportFile => {
            state.open_text_input(InputPurpose::ExportPath, EXPORT_FILE_NAME);
            Ok(false)
        }
        Action::ToggleHelp => {
            state.open_help_overlay();
            Ok(false)
        }

        // System
        Action::Cancel => {
            if state.filter.is_empty() {
                state.set_status("");
            } else {
                state.set_filter("");
                state.set_status("Filter cleared");
            }
            Ok(false)
        }
        Action::Quit => {
            state.should_quit = true;
            Ok(true)
        }
    }
}

fn move_cursor(state: &mut AppState, delta: isize) -> Result<bool> {
    let len = state.focused_len();
    if let Some(cursor) = state.focused_cursor_mut() {
        if len > 0 {
            *cursor = cursor.saturating_add_signed(delta).min(len - 1);
        }
    }
    Ok(false)
}

fn jump_to(state: &mut AppState, last: bool) -> Result<bool> {
    let len = state.focused_len();
    if let Some(cursor) = state.focused_cursor_mut() {
        *cursor = if last { len.saturating_sub(1) } else { 0 };
    }
    Ok(false)
}

fn adjust_focused_setting(state: &mut AppState, delta: i32) -> Result<bool> {
    if state.focus == Pane::Settings {
        state.adjust_setting(delta);
    }
    Ok(false)
}

fn handle_activate(state: &mut AppState) -> Result<bool> {
    match state.focus {
        Pane::Labels => {
            if let Some(label) = state.label_at_cursor().map(str::to_string) {
                let selected = state.session.toggle(&label);
                let verb = if selected { "Selected" } else { "Deselected" };
                state.set_status(format!("{verb} {label}"));
            }
            Ok(false)
        }
        Pane::Settings => adjust_focused_setting(state, 1),
        Pane::Result => handle_copy_result(state),
        Pane::History => {
            if state.session.select_history(state.history_cursor).is_some() {
                state.result_notice = None;
                state.set_status("History entry restored");
            }
            Ok(false)
        }
    }
}

fn handle_generate(state: &mut AppState) -> Result<bool> {
    match state.session.generate() {
        Ok(_) => {
            state.result_notice = None;
            state.history_cursor = 0;
            state.set_status("Generated");
        }
        Err(e) => state.result_notice = Some(e.to_string()),
    }
    Ok(false)
}

fn handle_copy_result(state: &mut AppState) -> Result<bool> {
    // A notice replaces the visible result; never copy what is hidden
    if state.result_notice.is_some() {
        state.set_status("Nothing to copy: generate a new result first");
        return Ok(false);
    }
    let Some(text) = state.session.current().filter(|text| !text.is_empty()) else {
        state.set_status("Nothing to copy yet");
        return Ok(false);
    };

    match clipboard::copy_to_system(text) {
        Ok(()) => {
            state.copy_feedback.start(Instant::now());
            state.set_status("Copied result to clipboard");
        }
        Err(e) => state.set_error(format!("Failed to copy to clipboard: {e}")),
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{GeneratorSettings, LabelStore};
    use crate::session::Session;
    use crate::tui::PopupType;

    fn state(labels: &[&str]) -> AppState {
        let session = Session::new(LabelStore::from_labels(labels), GeneratorSettings::default());
        AppState::new(session, Config::new())
    }

    #[test]
    fn test_activate_toggles_label_under_cursor() {
        let mut state = state(&["degas", "monet"]);
        dispatch_action(&mut state, Action::NavigateDown).unwrap();
        dispatch_action(&mut state, Action::Activate).unwrap();
        assert!(state.session.is_selected("monet"));
        assert_eq!(state.status_message, "Selected monet");

        dispatch_action(&mut state, Action::Activate).unwrap();
        assert!(!state.session.is_selected("monet"));
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut state = state(&["a", "b"]);
        dispatch_action(&mut state, Action::NavigateUp).unwrap();
        assert_eq!(state.label_cursor, 0);
        dispatch_action(&mut state, Action::JumpToLast).unwrap();
        dispatch_action(&mut state, Action::NavigateDown).unwrap();
        assert_eq!(state.label_cursor, 1);
    }

    #[test]
    fn test_generate_without_selection_shows_notice() {
        let mut state = state(&["a"]);
        dispatch_action(&mut state, Action::Generate).unwrap();
        assert_eq!(
            state.result_notice.as_deref(),
            Some("Select at least one artist tag to combine")
        );
        assert!(state.session.history().is_empty());
    }

    #[test]
    fn test_generate_records_and_clears_notice() {
        let mut state = state(&["a", "b"]);
        state.result_notice = Some("stale".to_string());
        dispatch_action(&mut state, Action::SelectVisible).unwrap();
        dispatch_action(&mut state, Action::Generate).unwrap();

        assert!(state.result_notice.is_none());
        assert!(state.session.current().is_some());
        assert_eq!(state.session.history().len(), 1);
    }

    #[test]
    fn test_copy_without_result_is_noop() {
        let mut state = state(&[]);
        dispatch_action(&mut state, Action::CopyResult).unwrap();
        assert_eq!(state.status_message, "Nothing to copy yet");
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_copy_refused_while_notice_hides_result() {
        let mut state = state(&["a"]);
        dispatch_action(&mut state, Action::SelectVisible).unwrap();
        dispatch_action(&mut state, Action::Generate).unwrap();
        assert!(state.session.current().is_some());

        dispatch_action(&mut state, Action::DeselectAll).unwrap();
        dispatch_action(&mut state, Action::Generate).unwrap();
        assert!(state.result_notice.is_some());

        dispatch_action(&mut state, Action::CopyResult).unwrap();
        assert_eq!(
            state.status_message,
            "Nothing to copy: generate a new result first"
        );
        assert!(!state.copy_feedback.is_active(Instant::now()));
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_left_right_only_adjust_in_settings() {
        let mut state = state(&[]);
        dispatch_action(&mut state, Action::NavigateRight).unwrap();
        assert_eq!(*state.session.settings(), GeneratorSettings::default());

        dispatch_action(&mut state, Action::FocusNext).unwrap();
        dispatch_action(&mut state, Action::NavigateRight).unwrap();
        assert!((state.session.settings().min_weight - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_export_prompt_is_prefilled() {
        let mut state = state(&[]);
        dispatch_action(&mut state, Action::ExportFile).unwrap();
        match &state.active_popup {
            Some(PopupType::TextInput(input)) => assert_eq!(input.value(), EXPORT_FILE_NAME),
            other => panic!("unexpected popup: {other:?}"),
        }
    }

    #[test]
    fn test_quit_and_cancel() {
        let mut state = state(&["monet"]);
        state.set_filter("mo");
        assert!(!dispatch_action(&mut state, Action::Cancel).unwrap());
        assert!(state.filter.is_empty());
        assert!(dispatch_action(&mut state, Action::Quit).unwrap());
        assert!(state.should_quit);
    }
}
