//! User-triggerable actions and their metadata.
//!
//! Every key the navigator reacts to resolves to an [`Action`]. The
//! [`ActionRegistry`] gives each action a stable string id (used in
//! `keymap.toml`) and a short label (used in the footer help line).

/// Every user-triggerable action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    CursorUp,
    CursorDown,
    Enter,
    GoParent,
    GoHome,
    SwitchPane,
    TogglePreview,
    ToggleSubfolders,
    ToggleHidden,
    Refresh,
    Quit,
    QuitAndNavigate,
    Interrupt,
}

/// Metadata for a single action.
#[derive(Debug, Clone)]
pub struct ActionDescriptor {
    pub action: Action,
    /// Identifier used in keymap files, e.g. `"quit_and_navigate"`.
    pub id: &'static str,
    /// Short label for help lines.
    pub name: &'static str,
    pub description: &'static str,
}

/// Lookup table of every [`Action`] with its metadata.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    descriptors: Vec<ActionDescriptor>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        let d = |action: Action,
                 id: &'static str,
                 name: &'static str,
                 description: &'static str| ActionDescriptor {
            action,
            id,
            name,
            description,
        };
        let descriptors = vec![
            d(Action::CursorUp, "cursor_up", "Up", "Move the selection up one entry"),
            d(Action::CursorDown, "cursor_down", "Down", "Move the selection down one entry"),
            d(Action::Enter, "enter", "Open", "Enter the selected folder"),
            d(Action::GoParent, "go_parent", "Back", "Go to the parent folder"),
            d(Action::GoHome, "go_home", "Home", "Go to the home folder"),
            d(Action::SwitchPane, "switch_pane", "Switch", "Switch between the two panes"),
            d(Action::TogglePreview, "toggle_preview", "Preview", "Preview the selected file"),
            d(
                Action::ToggleSubfolders,
                "toggle_subfolders",
                "Peek",
                "Show the selected folder's contents in the right pane",
            ),
            d(Action::ToggleHidden, "toggle_hidden", "Hidden", "Show or hide dot entries"),
            d(Action::Refresh, "refresh", "Reload", "Re-read the current folder"),
            d(Action::Quit, "quit", "Quit", "Quit without changing directory"),
            d(
                Action::QuitAndNavigate,
                "quit_and_navigate",
                "Quit & cd",
                "Quit and print the selected folder for the shell to enter",
            ),
            d(Action::Interrupt, "interrupt", "Abort", "Quit immediately"),
        ];
        Self { descriptors }
    }

    pub fn all(&self) -> &[ActionDescriptor] {
        &self.descriptors
    }

    /// Resolves a keymap identifier to its action.
    pub fn find_by_id(&self, id: &str) -> Option<Action> {
        self.descriptors
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.action)
    }

    pub fn descriptor_for(&self, action: Action) -> Option<&ActionDescriptor> {
        self.descriptors.iter().find(|d| d.action == action)
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
