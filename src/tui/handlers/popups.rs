//! Popup input handlers.

use std::path::Path;

use anyhow::Result;
use crossterm::event::{self, KeyCode};

use crate::models::ImportError;
use crate::tui::{AppState, Component, InputPurpose, PopupType, TextInputEvent};

/// Route input to the active popup.
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match state.active_popup {
        Some(PopupType::TextInput(_)) => handle_text_input(state, key),
        Some(PopupType::Help(_)) => handle_help_input(state, key),
        None => Ok(false),
    }
}

fn handle_text_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(PopupType::TextInput(input)) = state.active_popup.as_mut() else {
        return Ok(false);
    };
    let purpose = input.purpose();
    let original = input.original().to_string();
    let Some(event) = input.handle_input(key) else {
        return Ok(false);
    };

    match event {
        TextInputEvent::Changed(text) => state.set_filter(text),
        TextInputEvent::Cancelled => {
            if purpose == InputPurpose::Search {
                state.set_filter(original);
            }
            state.close_popup();
            state.set_status("Cancelled");
        }
        TextInputEvent::Confirmed(text) => {
            state.close_popup();
            match purpose {
                InputPurpose::Search => state.set_filter(text),
                InputPurpose::AddLabel => add_label(state, &text),
                InputPurpose::ImportPath => import_file(state, &text),
                InputPurpose::ExportPath => export_file(state, &text),
            }
        }
    }

    Ok(false)
}

fn add_label(state: &mut AppState, text: &str) {
    let label = text.trim();
    if label.is_empty() {
        state.set_status("Nothing to add");
    } else if state.session.add_label(label) {
        state.refresh_visible();
        state.set_status(format!("Added and selected {label}"));
    } else {
        state.set_status(format!("{label} is already in the list"));
    }
}

fn import_file(state: &mut AppState, path: &str) {
    let path = path.trim();
    if path.is_empty() {
        state.set_status("Import cancelled");
        return;
    }

    match state.session.import_file(Path::new(path)) {
        Ok(added) => {
            state.refresh_visible();
            state.set_status(format!(
                "Imported {added} new labels ({} total)",
                state.session.labels().len()
            ));
        }
        Err(e) if e.downcast_ref::<ImportError>().is_some() => {
            state.set_error(format!("{e}: the file has no usable labels"));
        }
        Err(e) => state.set_error(format!("{e:#}")),
    }
}

fn export_file(state: &mut AppState, path: &str) {
    let path = path.trim();
    if path.is_empty() {
        state.set_status("Export cancelled");
        return;
    }

    match state.session.export_file(Path::new(path)) {
        Ok(count) => state.set_status(format!("Exported {count} labels to {path}")),
        Err(e) => state.set_error(format!("{e:#}")),
    }
}

fn handle_help_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(PopupType::Help(help)) = state.active_popup.as_mut() else {
        return Ok(false);
    };

    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?' | 'q') => state.close_popup(),
        KeyCode::Up | KeyCode::Char('k') => help.scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => help.scroll_down(),
        KeyCode::Home => help.scroll_to_top(),
        KeyCode::End => help.scroll_to_bottom(),
        _ => {}
    }
    Ok(false)
}
