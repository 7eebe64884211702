//! dirhop core library: UI-agnostic directory navigation.
//!
//! `dirhop-core` holds everything about browsing a directory tree that does
//! not depend on a terminal: listing and sorting entries, the dual-pane
//! selection and scroll model, and the navigation state machine. The
//! navigator never performs I/O itself; it emits [`Request`]s that a
//! frontend executes against a [`Filesystem`] and feeds back as
//! [`Completion`]s.
//!
//! # Modules
//!
//! - [`fs`]: Directory listing, entry classification, text previews and the [`Filesystem`] seam.
//! - [`nav`]: Directory context, selection, scrolling, the [`Navigator`] and its [`View`].
//! - [`config`]: TOML settings, key bindings and colour theme.
//! - [`event`]: Keys, requests and completions exchanged with a frontend.
//! - [`env`]: Process environment captured at startup.
//! - [`error`]: Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod action;
pub mod config;
pub mod env;
pub mod error;
pub mod event;
pub mod fs;
pub mod nav;

pub use error::{CoreError, CoreResult, LoadErrorKind};
pub use event::{Completion, Key, Request, Ticket};
pub use fs::backend::execute;
pub use fs::entry::{DirectoryEntry, EntryKind};
pub use fs::ops::read_directory;
pub use fs::snapshot::DirectorySnapshot;
pub use fs::{Filesystem, LocalFs, TextPreview};
pub use nav::context::DirectoryContext;
pub use nav::navigator::{FolderSelection, Mode, Navigator};
pub use nav::scroll::ScrollWindow;
pub use nav::selection::{Pane, SelectionTracker};
pub use nav::view::View;

pub use action::{Action, ActionDescriptor, ActionRegistry};
pub use config::keymap::Keymap;
pub use config::settings::Config;
pub use config::theme::{parse_color, Theme};
pub use env::Environment;

/// Normalises a string to NFC (composed) form.
///
/// macOS stores filenames in NFD (decomposed), which makes accented and
/// Hangul names compare and render differently from what users typed.
pub fn nfc_string(s: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    s.nfc().collect()
}
