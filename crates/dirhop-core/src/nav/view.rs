//! Render-ready snapshot of the navigator.
//!
//! Frontends draw from a [`View`] only. Every list is already cut to the
//! visible scroll window, so a renderer never needs to know about offsets or
//! the synthetic `.` row.

use std::path::Path;

use crate::error::LoadErrorKind;
use crate::fs::entry::DirectoryEntry;
use crate::nav::navigator::{Mode, Navigator, PeekState};
use crate::nav::path::truncate_for_display;
use crate::nav::selection::Pane;

/// Longest title shown above the Contents pane.
pub const TITLE_MAX_CHARS: usize = 30;

/// Shown in a pane with nothing to list.
pub const EMPTY_MESSAGE: &str = "Empty directory";

pub const LOADING_MESSAGE: &str = "Loading...";

/// What the frontend should draw this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    Browser(BrowserView<'a>),
    Preview(PreviewView<'a>),
    Terminated,
}

/// The dual-pane browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserView<'a> {
    pub current_path: &'a Path,
    pub folders: PaneView<'a>,
    pub contents: PaneView<'a>,
    pub error: Option<&'a str>,
    pub error_kind: Option<LoadErrorKind>,
    pub loading: bool,
    pub show_hidden: bool,
    pub show_subfolders: bool,
}

/// One list pane, cut to its visible window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneView<'a> {
    pub pane: Pane,
    pub title: String,
    pub items: Vec<ItemView<'a>>,
    pub offset: usize,
    pub total: usize,
    pub is_active: bool,
    pub hidden_above: usize,
    pub hidden_below: usize,
    /// Replaces the list when there is nothing to show.
    pub message: Option<String>,
}

impl PaneView<'_> {
    /// Position of the selected row within `items`, if it is visible.
    pub fn selected_row(&self) -> Option<usize> {
        self.items.iter().position(|item| item.is_selected)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// The synthetic `.` row.
    CurrentDir,
    Directory,
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemView<'a> {
    pub name: &'a str,
    pub kind: ItemKind,
    pub is_hidden: bool,
    pub is_symlink: bool,
    pub is_selected: bool,
}

impl<'a> ItemView<'a> {
    fn entry(entry: &'a DirectoryEntry, is_selected: bool) -> Self {
        Self {
            name: entry.name(),
            kind: if entry.is_dir() {
                ItemKind::Directory
            } else {
                ItemKind::File
            },
            is_hidden: entry.is_hidden(),
            is_symlink: entry.is_symlink(),
            is_selected,
        }
    }

    fn current_dir(is_selected: bool) -> Self {
        Self {
            name: ".",
            kind: ItemKind::CurrentDir,
            is_hidden: false,
            is_symlink: false,
            is_selected,
        }
    }
}

/// The file pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView<'a> {
    pub path: &'a Path,
    /// Visible lines only.
    pub lines: &'a [String],
    pub scroll: usize,
    pub total: usize,
    pub loading: bool,
}

impl Navigator {
    /// Builds the view for the current state.
    pub fn view(&self) -> View<'_> {
        match self.mode() {
            Mode::Terminated => View::Terminated,
            Mode::Previewing(preview) => {
                let all = preview.lines();
                let start = preview.scroll().min(all.len());
                let end = (start + self.preview_viewport()).min(all.len());
                View::Preview(PreviewView {
                    path: preview.path(),
                    lines: &all[start..end],
                    scroll: preview.scroll(),
                    total: all.len(),
                    loading: preview.is_loading(),
                })
            }
            Mode::Browsing => View::Browser(self.browser_view()),
        }
    }

    fn browser_view(&self) -> BrowserView<'_> {
        let context = self.context();
        BrowserView {
            current_path: context.current_path(),
            folders: self.folders_view(),
            contents: self.contents_view(),
            error: context.load_error(),
            error_kind: context.load_error_kind(),
            loading: context.is_loading(),
            show_hidden: self.show_hidden(),
            show_subfolders: self.show_subfolders(),
        }
    }

    fn folders_view(&self) -> PaneView<'_> {
        let selected = self.selected_index(Pane::Folders);
        let rows = std::iter::once(None).chain(self.folders().iter().map(Some));
        let items = rows
            .enumerate()
            .map(|(i, entry)| match entry {
                None => ItemView::current_dir(i == selected),
                Some(entry) => ItemView::entry(entry, i == selected),
            });
        let total = self.folder_count();
        self.pane_view(Pane::Folders, "Folders".to_string(), items, total, None)
    }

    fn contents_view(&self) -> PaneView<'_> {
        let source = self.contents();
        let selected = self.selected_index(Pane::Contents);
        let mut title = truncate_for_display(source.base, TITLE_MAX_CHARS);
        let message = match source.peek.map(|p| &p.state) {
            Some(PeekState::Loading) => Some(LOADING_MESSAGE.to_string()),
            Some(PeekState::Failed(error)) => {
                title = error.clone();
                Some(EMPTY_MESSAGE.to_string())
            }
            _ if source.entries.is_empty() => Some(EMPTY_MESSAGE.to_string()),
            _ => None,
        };
        let items = source
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| ItemView::entry(entry, i == selected));
        let total = source.entries.len();
        self.pane_view(Pane::Contents, title, items, total, message)
    }

    fn pane_view<'a>(
        &self,
        pane: Pane,
        title: String,
        items: impl Iterator<Item = ItemView<'a>>,
        total: usize,
        message: Option<String>,
    ) -> PaneView<'a> {
        let window = self.scroll_window();
        let offset = self.offset(pane);
        let (hidden_above, hidden_below) = window.hidden_counts(offset, total);
        PaneView {
            pane,
            title,
            items: items.skip(offset).take(window.window_height()).collect(),
            offset,
            total,
            is_active: self.selection().active_pane() == pane,
            hidden_above,
            hidden_below,
            message,
        }
    }
}
