//! Key binding configuration.
//!
//! Arrow keys, Enter, Tab, Space, Home and Ctrl-C have fixed meanings.
//! Character keys resolve through a [`Keymap`], which maps a one-character
//! key name (e.g. `"Q"`) to an [`Action`]. TOML files use the string action
//! ids from [`ActionRegistry`]:
//!
//! ```toml
//! [bindings]
//! "x" = "quit_and_navigate"
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionRegistry};
use crate::error::{CoreError, CoreResult};
use crate::event::Key;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawKeymap {
    #[serde(default)]
    bindings: HashMap<String, String>,
}

/// Character key bindings plus their reverse index for help display.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<String, Action>,
    reverse: HashMap<Action, Vec<String>>,
}

impl Default for Keymap {
    fn default() -> Self {
        let bindings: HashMap<String, Action> = [
            ("q", Action::Quit),
            ("Q", Action::QuitAndNavigate),
            ("H", Action::GoHome),
            ("k", Action::CursorUp),
            ("j", Action::CursorDown),
            ("h", Action::GoParent),
            ("l", Action::Enter),
            ("s", Action::ToggleSubfolders),
            (".", Action::ToggleHidden),
            ("r", Action::Refresh),
        ]
        .into_iter()
        .map(|(k, a)| (k.to_string(), a))
        .collect();
        Self::from_bindings(bindings)
    }
}

fn build_reverse(bindings: &HashMap<String, Action>) -> HashMap<Action, Vec<String>> {
    let mut reverse: HashMap<Action, Vec<String>> = HashMap::new();
    for (key, action) in bindings {
        reverse.entry(*action).or_default().push(key.clone());
    }
    for keys in reverse.values_mut() {
        keys.sort();
    }
    reverse
}

impl Keymap {
    /// Loads character bindings from a TOML file at `path`, replacing the defaults.
    ///
    /// Unknown action ids and keys longer than one character are ignored.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(e, path))?;
        let raw: RawKeymap =
            toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawKeymap) -> Self {
        let registry = ActionRegistry::new();
        let bindings = raw
            .bindings
            .into_iter()
            .filter(|(key, _)| key.chars().count() == 1)
            .filter_map(|(key, id)| match registry.find_by_id(&id) {
                Some(action) => Some((key, action)),
                None => {
                    tracing::warn!(key = %key, action = %id, "ignoring unknown action in keymap");
                    None
                }
            })
            .collect();
        Self::from_bindings(bindings)
    }

    /// Builds a keymap from already-resolved character bindings.
    pub fn from_bindings(bindings: HashMap<String, Action>) -> Self {
        let reverse = build_reverse(&bindings);
        Self { bindings, reverse }
    }

    /// Returns the action bound to a character key name.
    pub fn action_for_key(&self, key: &str) -> Option<Action> {
        self.bindings.get(key).copied()
    }

    /// Resolves a decoded key to an action, fixed keys first.
    pub fn resolve(&self, key: Key) -> Option<Action> {
        match key {
            Key::Up => Some(Action::CursorUp),
            Key::Down => Some(Action::CursorDown),
            Key::Left => Some(Action::GoParent),
            Key::Right | Key::Enter => Some(Action::Enter),
            Key::Tab => Some(Action::SwitchPane),
            Key::Space => Some(Action::TogglePreview),
            Key::Home => Some(Action::GoHome),
            Key::CtrlC => Some(Action::Interrupt),
            Key::Char(c) => {
                let mut buf = [0u8; 4];
                self.action_for_key(c.encode_utf8(&mut buf))
            }
        }
    }

    /// Returns the character keys bound to `action`, sorted.
    pub fn keys_for_action(&self, action: Action) -> Option<&[String]> {
        self.reverse.get(&action).map(|v| v.as_slice())
    }

    pub fn bindings(&self) -> &HashMap<String, Action> {
        &self.bindings
    }
}
