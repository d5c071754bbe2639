//! Centralized shortcut and action system.
//!
//! Key events are looked up here and turned into [`Action`]s; the TUI
//! handlers only ever match on actions. The help overlay is generated from
//! the same table, so bindings and help text cannot drift apart.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Context name for the main screen.
pub const MAIN_CONTEXT: &str = "main";

/// All possible actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    /// Cursor up in the focused pane
    NavigateUp,
    /// Cursor down in the focused pane
    NavigateDown,
    /// Decrease the focused setting
    NavigateLeft,
    /// Increase the focused setting
    NavigateRight,
    /// First row
    JumpToFirst,
    /// Last row
    JumpToLast,
    /// Next pane
    FocusNext,
    /// Previous pane
    FocusPrevious,

    // === SELECTION ===
    /// Toggle label, or republish history entry
    Activate,
    /// Select every label matching the filter
    SelectVisible,
    /// Clear the selection
    DeselectAll,
    /// Edit the label filter
    Search,

    // === GENERATION ===
    /// Run the combination engine
    Generate,
    /// Copy the current result
    CopyResult,

    // === LABEL LIST ===
    /// Add one label
    AddLabel,
    /// Import labels from a file
    ImportFile,
    /// Export labels to a file
    ExportFile,

    // === HELP ===
    /// Show or hide the help overlay
    ToggleHelp,

    // === GENERAL ===
    /// Leave the application
    Quit,
    /// Close popup, clear filter or dismiss messages
    Cancel,
}

impl Action {
    /// Actions in help-overlay order.
    pub const ALL: [Self; 20] = [
        Self::FocusNext,
        Self::FocusPrevious,
        Self::NavigateUp,
        Self::NavigateDown,
        Self::NavigateLeft,
        Self::NavigateRight,
        Self::JumpToFirst,
        Self::JumpToLast,
        Self::Activate,
        Self::SelectVisible,
        Self::DeselectAll,
        Self::Search,
        Self::Generate,
        Self::CopyResult,
        Self::AddLabel,
        Self::ImportFile,
        Self::ExportFile,
        Self::ToggleHelp,
        Self::Cancel,
        Self::Quit,
    ];

    /// Stable action ID.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::NavigateUp => "navigate_up",
            Self::NavigateDown => "navigate_down",
            Self::NavigateLeft => "navigate_left",
            Self::NavigateRight => "navigate_right",
            Self::JumpToFirst => "jump_first",
            Self::JumpToLast => "jump_last",
            Self::FocusNext => "focus_next",
            Self::FocusPrevious => "focus_previous",
            Self::Activate => "activate",
            Self::SelectVisible => "select_visible",
            Self::DeselectAll => "deselect_all",
            Self::Search => "search",
            Self::Generate => "generate",
            Self::CopyResult => "copy_result",
            Self::AddLabel => "add_label",
            Self::ImportFile => "import_file",
            Self::ExportFile => "export_file",
            Self::ToggleHelp => "toggle_help",
            Self::Quit => "quit",
            Self::Cancel => "cancel",
        }
    }

    /// Help text for the overlay.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::NavigateUp => "Move up",
            Self::NavigateDown => "Move down",
            Self::NavigateLeft => "Decrease setting",
            Self::NavigateRight => "Increase setting",
            Self::JumpToFirst => "Jump to first row",
            Self::JumpToLast => "Jump to last row",
            Self::FocusNext => "Next pane",
            Self::FocusPrevious => "Previous pane",
            Self::Activate => "Toggle label / use history entry",
            Self::SelectVisible => "Select all visible labels",
            Self::DeselectAll => "Deselect all labels",
            Self::Search => "Filter labels",
            Self::Generate => "Generate tags",
            Self::CopyResult => "Copy result to clipboard",
            Self::AddLabel => "Add a label",
            Self::ImportFile => "Import labels from file",
            Self::ExportFile => "Export labels to file",
            Self::ToggleHelp => "Toggle this help",
            Self::Quit => "Quit",
            Self::Cancel => "Close popup / clear filter",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }

    /// Short human form, e.g. `Ctrl+C`, `Space`, `A`.
    #[must_use]
    pub fn display(&self) -> String {
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            other => format!("{other:?}"),
        };

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{}", key.to_uppercase())
        } else {
            key
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
#[derive(Debug, Clone)]
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
    /// Bindings per action in registration order, for help display
    order: Vec<(Action, KeyBinding)>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
            order: Vec::new(),
        };

        registry.register_main_shortcuts();
        registry
    }

    /// Register all shortcuts for the main context.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = MAIN_CONTEXT;

        // === NAVIGATION ===
        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Left, M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Right, M::NONE, Action::NavigateRight);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('h'), M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Char('l'), M::NONE, Action::NavigateRight);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);
        self.register(ctx, K::Tab, M::NONE, Action::FocusNext);
        self.register(ctx, K::BackTab, M::SHIFT, Action::FocusPrevious);
        self.register(ctx, K::BackTab, M::NONE, Action::FocusPrevious);

        // === SELECTION ===
        self.register(ctx, K::Char(' '), M::NONE, Action::Activate);
        self.register(ctx, K::Enter, M::NONE, Action::Activate);
        self.register(ctx, K::Char('A'), M::SHIFT, Action::SelectVisible);
        self.register(ctx, K::Char('D'), M::SHIFT, Action::DeselectAll);
        self.register(ctx, K::Char('/'), M::NONE, Action::Search);

        // === GENERATION ===
        self.register(ctx, K::Char('g'), M::NONE, Action::Generate);
        self.register(ctx, K::Char('y'), M::NONE, Action::CopyResult);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::CopyResult);

        // === LABEL LIST ===
        self.register(ctx, K::Char('a'), M::NONE, Action::AddLabel);
        self.register(ctx, K::Char('i'), M::NONE, Action::ImportFile);
        self.register(ctx, K::Char('e'), M::NONE, Action::ExportFile);

        // === HELP ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('?'), M::SHIFT, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
        if context == MAIN_CONTEXT {
            self.order.push((action, binding));
        }
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Human-readable keys bound to an action, deduplicated, e.g. `"y, Ctrl+C"`.
    #[must_use]
    pub fn keys_for(&self, action: Action) -> String {
        let mut keys: Vec<String> = Vec::new();
        for (bound, binding) in &self.order {
            let display = binding.display();
            if *bound == action && !keys.contains(&display) {
                keys.push(display);
            }
        }
        keys.join(", ")
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_basic_lookup() {
        let registry = ShortcutRegistry::new();

        assert_eq!(
            registry.lookup(MAIN_CONTEXT, key(KeyCode::Up, KeyModifiers::NONE)),
            Some(Action::NavigateUp)
        );
        assert_eq!(
            registry.lookup(MAIN_CONTEXT, key(KeyCode::Char('g'), KeyModifiers::NONE)),
            Some(Action::Generate)
        );
        assert_eq!(
            registry.lookup(MAIN_CONTEXT, key(KeyCode::Char('z'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_copy_has_two_bindings() {
        let registry = ShortcutRegistry::new();

        assert_eq!(
            registry.lookup(MAIN_CONTEXT, key(KeyCode::Char('y'), KeyModifiers::NONE)),
            Some(Action::CopyResult)
        );
        assert_eq!(
            registry.lookup(MAIN_CONTEXT, key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::CopyResult)
        );
        assert_eq!(registry.keys_for(Action::CopyResult), "y, Ctrl+C");
    }

    #[test]
    fn test_shifted_letters() {
        let registry = ShortcutRegistry::new();

        assert_eq!(
            registry.lookup(MAIN_CONTEXT, key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Action::SelectVisible)
        );
        assert_eq!(
            registry.lookup(MAIN_CONTEXT, key(KeyCode::Char('D'), KeyModifiers::SHIFT)),
            Some(Action::DeselectAll)
        );
        assert_eq!(
            registry.lookup(MAIN_CONTEXT, key(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(Action::AddLabel)
        );
    }

    #[test]
    fn test_vim_navigation() {
        let registry = ShortcutRegistry::new();

        for (c, action) in [
            ('h', Action::NavigateLeft),
            ('j', Action::NavigateDown),
            ('k', Action::NavigateUp),
            ('l', Action::NavigateRight),
        ] {
            assert_eq!(
                registry.lookup(MAIN_CONTEXT, key(KeyCode::Char(c), KeyModifiers::NONE)),
                Some(action)
            );
        }
    }

    #[test]
    fn test_every_action_has_a_binding() {
        let registry = ShortcutRegistry::new();
        for action in Action::ALL {
            assert!(!registry.keys_for(action).is_empty(), "{}", action.id());
        }
    }

    #[test]
    fn test_backtab_display_deduplicated() {
        let registry = ShortcutRegistry::new();
        assert_eq!(registry.keys_for(Action::FocusPrevious), "Shift+Tab");
    }
}
