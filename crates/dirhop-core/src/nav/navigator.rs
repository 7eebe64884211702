//! The navigation state machine.
//!
//! [`Navigator`] interprets one decoded [`Key`] at a time against the
//! directory context, the selection tracker and the pane scroll offsets, and
//! answers with the next state plus any I/O [`Request`]s. Results come back
//! through [`Navigator::complete`]. Nothing here touches the disk, so every
//! transition can be driven synchronously in tests via [`Navigator::settle`].

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::action::Action;
use crate::config::keymap::Keymap;
use crate::config::settings::Config;
use crate::env::Environment;
use crate::error::CoreResult;
use crate::event::{Completion, Key, Request, Ticket};
use crate::fs::backend::{execute, Filesystem};
use crate::fs::entry::DirectoryEntry;
use crate::fs::snapshot::DirectorySnapshot;
use crate::nav::context::{DirectoryContext, LoadOutcome};
use crate::nav::scroll::ScrollWindow;
use crate::nav::selection::{Direction, Pane, SelectionTracker};

/// Placeholder shown when a preview cannot be read.
pub const PREVIEW_ERROR_LINE: &str = "Error reading file";

/// Top-level controller state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Previewing(Preview),
    Terminated,
}

/// An open file preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    path: PathBuf,
    ticket: Ticket,
    /// `None` until the read completes.
    lines: Option<Vec<String>>,
    scroll: usize,
}

impl Preview {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        self.lines.as_deref().unwrap_or(&[])
    }

    pub fn is_loading(&self) -> bool {
        self.lines.is_none()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }
}

/// What the Folders pane has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderSelection<'a> {
    /// The synthetic `.` entry.
    Current,
    Folder(&'a DirectoryEntry),
}

/// Listing of the folder being peeked at in the Contents pane.
#[derive(Debug, Clone)]
pub(crate) struct Peek {
    pub(crate) path: PathBuf,
    ticket: Ticket,
    pub(crate) state: PeekState,
}

#[derive(Debug, Clone)]
pub(crate) enum PeekState {
    Loading,
    Ready(DirectorySnapshot),
    Failed(String),
}

/// Effects applied once the pending navigation succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Landing {
    /// Fresh directory: both selections and offsets go back to 0.
    Reset { focus: Option<Pane> },
    /// Same directory re-read: selections are clamped to the new listing.
    Keep,
}

/// The rows the Contents pane currently lists and the folder they live in.
pub(crate) struct ContentsSource<'a> {
    pub(crate) base: &'a Path,
    pub(crate) entries: &'a [DirectoryEntry],
    pub(crate) peek: Option<&'a Peek>,
}

/// The navigation controller.
///
/// Immutable in the same way as the rest of the core: every transition
/// consumes the navigator and returns the next one together with the I/O
/// requests the transition needs.
#[derive(Debug, Clone)]
pub struct Navigator {
    context: DirectoryContext,
    selection: SelectionTracker,
    folder_offset: usize,
    content_offset: usize,
    scroll: ScrollWindow,
    keymap: Keymap,
    mode: Mode,
    show_hidden: bool,
    show_subfolders: bool,
    preview_enabled: bool,
    preview_viewport: usize,
    peek: Option<Peek>,
    landing: Option<Landing>,
    emitted: Option<PathBuf>,
    next_ticket: u64,
}

type Step = (Navigator, Vec<Request>);

impl Navigator {
    /// Creates a navigator at the environment's start directory. Call
    /// [`Navigator::start`] to issue the initial listing.
    pub fn new(env: Environment, config: &Config, keymap: Keymap) -> Self {
        Self {
            context: DirectoryContext::new(env),
            selection: SelectionTracker::new(),
            folder_offset: 0,
            content_offset: 0,
            scroll: config.scroll_window(),
            keymap,
            mode: Mode::Browsing,
            show_hidden: config.general.show_hidden,
            show_subfolders: config.general.show_subfolders,
            preview_enabled: config.preview.enabled,
            preview_viewport: config.preview.viewport_height,
            peek: None,
            landing: None,
            emitted: None,
            next_ticket: 0,
        }
    }

    /// Requests the listing of the start directory.
    pub fn start(self) -> Step {
        let path = self.context.current_path().to_path_buf();
        self.navigate(path, Landing::Reset { focus: None })
    }

    // --- accessors ---

    pub fn context(&self) -> &DirectoryContext {
        &self.context
    }

    pub fn selection(&self) -> SelectionTracker {
        self.selection
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_terminated(&self) -> bool {
        self.mode == Mode::Terminated
    }

    /// The path chosen with quit-and-navigate, if any.
    pub fn emitted_path(&self) -> Option<&Path> {
        self.emitted.as_deref()
    }

    pub fn offset(&self, pane: Pane) -> usize {
        match pane {
            Pane::Folders => self.folder_offset,
            Pane::Contents => self.content_offset,
        }
    }

    pub fn scroll_window(&self) -> ScrollWindow {
        self.scroll
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    pub fn show_subfolders(&self) -> bool {
        self.show_subfolders
    }

    pub fn preview_viewport(&self) -> usize {
        self.preview_viewport
    }

    /// Sub-folders of the current directory (without the synthetic entry).
    pub fn folders(&self) -> &[DirectoryEntry] {
        self.context
            .snapshot()
            .map(DirectorySnapshot::folders)
            .unwrap_or(&[])
    }

    /// Rows in the Folders pane, counting the synthetic `.` entry.
    pub fn folder_count(&self) -> usize {
        self.folders().len() + 1
    }

    /// Rows in the Contents pane.
    pub fn content_count(&self) -> usize {
        self.contents().entries.len()
    }

    fn item_count(&self, pane: Pane) -> usize {
        match pane {
            Pane::Folders => self.folder_count(),
            Pane::Contents => self.content_count(),
        }
    }

    /// Selected index in `pane`, clamped to the pane's current rows.
    pub fn selected_index(&self, pane: Pane) -> usize {
        self.selection
            .index(pane)
            .min(self.item_count(pane).saturating_sub(1))
    }

    pub fn selected_folder(&self) -> FolderSelection<'_> {
        match self.selected_index(Pane::Folders) {
            0 => FolderSelection::Current,
            i => self
                .folders()
                .get(i - 1)
                .map_or(FolderSelection::Current, FolderSelection::Folder),
        }
    }

    pub fn selected_content(&self) -> Option<&DirectoryEntry> {
        self.contents()
            .entries
            .get(self.selected_index(Pane::Contents))
    }

    /// Folder whose listing the Contents pane shows.
    pub fn contents_path(&self) -> &Path {
        self.contents().base
    }

    pub(crate) fn contents(&self) -> ContentsSource<'_> {
        let target = self.peek_target();
        if let (Some(peek), Some(target)) = (self.peek.as_ref(), target) {
            if peek.path == target {
                let entries = match &peek.state {
                    PeekState::Ready(snapshot) => snapshot.combined(),
                    PeekState::Loading | PeekState::Failed(_) => &[],
                };
                return ContentsSource {
                    base: &peek.path,
                    entries,
                    peek: Some(peek),
                };
            }
        }
        ContentsSource {
            base: self.context.current_path(),
            entries: self
                .context
                .snapshot()
                .map(DirectorySnapshot::combined)
                .unwrap_or(&[]),
            peek: None,
        }
    }

    /// Folder the Contents pane should peek into, when peeking is on and a
    /// real folder is selected.
    fn peek_target(&self) -> Option<PathBuf> {
        if !self.show_subfolders {
            return None;
        }
        match self.selected_folder() {
            FolderSelection::Current => None,
            FolderSelection::Folder(entry) => Some(self.context.child_path(entry.file_name())),
        }
    }

    // --- input ---

    /// Handles one decoded key.
    pub fn handle_key(self, key: Key) -> Step {
        let Some(action) = self.keymap.resolve(key) else {
            return (self, Vec::new());
        };
        match self.mode {
            Mode::Terminated => (self, Vec::new()),
            Mode::Previewing(_) => (self.handle_preview_action(action), Vec::new()),
            Mode::Browsing => self.handle_browse_action(action),
        }
    }

    fn handle_browse_action(self, action: Action) -> Step {
        match action {
            Action::Quit | Action::Interrupt => (self.terminate(None), Vec::new()),
            Action::QuitAndNavigate => {
                let target = match self.selected_folder() {
                    FolderSelection::Current => self.context.current_path().to_path_buf(),
                    FolderSelection::Folder(entry) => self.context.child_path(entry.file_name()),
                };
                (self.terminate(Some(target)), Vec::new())
            }
            Action::SwitchPane => {
                let selection = self.selection.switch_pane();
                (Self { selection, ..self }, Vec::new())
            }
            Action::CursorUp => self.move_cursor(Direction::Up),
            Action::CursorDown => self.move_cursor(Direction::Down),
            Action::Enter => self.enter(),
            Action::GoParent => match self.selection.active_pane() {
                Pane::Contents => {
                    let selection = self.selection.set_active_pane(Pane::Folders);
                    (Self { selection, ..self }, Vec::new())
                }
                Pane::Folders => self.go_parent(),
            },
            Action::GoHome => {
                self.begin(Landing::Reset { focus: None }, DirectoryContext::navigate_home)
            }
            Action::TogglePreview => self.open_preview(),
            Action::ToggleSubfolders => {
                let show_subfolders = !self.show_subfolders;
                tracing::debug!(show_subfolders, "toggle subfolder peek");
                Self {
                    show_subfolders,
                    ..self
                }
                .sync_peek()
            }
            Action::ToggleHidden => {
                let show_hidden = !self.show_hidden;
                tracing::debug!(show_hidden, "toggle hidden entries");
                Self {
                    show_hidden,
                    ..self
                }
                .reload()
            }
            Action::Refresh => self.reload(),
        }
    }

    fn handle_preview_action(self, action: Action) -> Self {
        let Mode::Previewing(preview) = self.mode else {
            return self;
        };
        let max_scroll = preview.lines().len().saturating_sub(self.preview_viewport);
        let mode = match action {
            Action::CursorUp => Mode::Previewing(Preview {
                scroll: preview.scroll.saturating_sub(1).min(max_scroll),
                ..preview
            }),
            Action::CursorDown => Mode::Previewing(Preview {
                scroll: (preview.scroll + 1).min(max_scroll),
                ..preview
            }),
            Action::TogglePreview | Action::Interrupt | Action::Quit => {
                tracing::debug!(path = %preview.path.display(), "close preview");
                Mode::Browsing
            }
            _ => Mode::Previewing(preview),
        };
        Self { mode, ..self }
    }

    fn terminate(self, emitted: Option<PathBuf>) -> Self {
        tracing::info!(emitted = ?emitted, "navigator terminated");
        Self {
            mode: Mode::Terminated,
            emitted,
            ..self
        }
    }

    fn move_cursor(self, direction: Direction) -> Step {
        let pane = self.selection.active_pane();
        let count = self.item_count(pane);
        let selection = self.selection.move_selection(direction, count);
        let moved = Self { selection, ..self }.rescroll(pane);
        match pane {
            Pane::Folders => moved.sync_peek(),
            Pane::Contents => (moved, Vec::new()),
        }
    }

    fn enter(self) -> Step {
        let landing = Landing::Reset {
            focus: Some(Pane::Folders),
        };
        match self.selection.active_pane() {
            Pane::Folders => {
                let name = match self.selected_folder() {
                    FolderSelection::Current => None,
                    FolderSelection::Folder(entry) => Some(entry.file_name().to_os_string()),
                };
                match name {
                    Some(name) => {
                        self.begin(landing, |ctx, ticket| ctx.navigate_to_folder(name, ticket))
                    }
                    None => {
                        let selection = self.selection.set_active_pane(Pane::Contents);
                        (Self { selection, ..self }, Vec::new())
                    }
                }
            }
            Pane::Contents => {
                let target = self
                    .selected_content()
                    .filter(|entry| entry.is_dir())
                    .map(|entry| self.contents_path().join(entry.file_name()));
                match target {
                    Some(path) => self.navigate(path, landing),
                    None => (self, Vec::new()),
                }
            }
        }
    }

    fn go_parent(self) -> Step {
        let (mut nav, ticket) = self.issue_ticket();
        let (context, request) = nav.context.navigate_to_parent(ticket);
        nav.context = context;
        match request {
            Some(request) => {
                nav.landing = Some(Landing::Reset { focus: None });
                (nav, vec![request])
            }
            None => (nav, Vec::new()),
        }
    }

    fn open_preview(self) -> Step {
        if !self.preview_enabled || self.selection.active_pane() != Pane::Contents {
            return (self, Vec::new());
        }
        let Some(path) = self
            .selected_content()
            .filter(|entry| entry.is_file())
            .map(|entry| self.contents_path().join(entry.file_name()))
        else {
            return (self, Vec::new());
        };
        let (nav, ticket) = self.issue_ticket();
        tracing::debug!(path = %path.display(), ticket = ticket.0, "open preview");
        let request = Request::ReadFile {
            ticket,
            path: path.clone(),
        };
        let mode = Mode::Previewing(Preview {
            path,
            ticket,
            lines: None,
            scroll: 0,
        });
        (Self { mode, ..nav }, vec![request])
    }

    fn reload(self) -> Step {
        self.begin(Landing::Keep, DirectoryContext::reload)
    }

    fn navigate(self, path: PathBuf, landing: Landing) -> Step {
        self.begin(landing, |ctx, ticket| ctx.navigate_to_path(path, ticket))
    }

    /// Starts a context navigation under a fresh ticket.
    fn begin<F>(self, landing: Landing, start: F) -> Step
    where
        F: FnOnce(DirectoryContext, Ticket) -> (DirectoryContext, Request),
    {
        let (nav, ticket) = self.issue_ticket();
        let (context, request) = start(nav.context, ticket);
        let nav = Self {
            context,
            landing: Some(landing),
            ..nav
        };
        (nav, vec![request])
    }

    fn issue_ticket(self) -> (Self, Ticket) {
        let ticket = Ticket(self.next_ticket + 1);
        (
            Self {
                next_ticket: ticket.0,
                ..self
            },
            ticket,
        )
    }

    /// Recomputes `pane`'s offset around its selection.
    fn rescroll(self, pane: Pane) -> Self {
        let total = self.item_count(pane);
        let selected = self.selected_index(pane);
        let offset = self.scroll.compute_offset(selected, self.offset(pane), total);
        match pane {
            Pane::Folders => Self {
                folder_offset: offset,
                ..self
            },
            Pane::Contents => Self {
                content_offset: offset,
                ..self
            },
        }
    }

    /// Brings the peeked listing in line with the Folders selection.
    fn sync_peek(self) -> Step {
        let target = self.peek_target();
        let current = self.peek.as_ref().map(|p| p.path.as_path());
        if target.as_deref() == current {
            return (self, Vec::new());
        }

        let selection = self.selection.reset_selection(Some(Pane::Contents));
        let nav = Self {
            selection,
            content_offset: 0,
            ..self
        };
        match target {
            None => (Self { peek: None, ..nav }, Vec::new()),
            Some(path) => nav.request_peek(path),
        }
    }

    fn request_peek(self, path: PathBuf) -> Step {
        let (nav, ticket) = self.issue_ticket();
        tracing::debug!(path = %path.display(), ticket = ticket.0, "peek");
        let request = Request::ListDirectory {
            ticket,
            path: path.clone(),
        };
        let peek = Peek {
            path,
            ticket,
            state: PeekState::Loading,
        };
        (
            Self {
                peek: Some(peek),
                ..nav
            },
            vec![request],
        )
    }

    // --- completions ---

    /// Applies the result of a previously issued request.
    pub fn complete(self, completion: Completion) -> Step {
        match completion {
            Completion::Listed { ticket, result } => self.complete_listing(ticket, result),
            Completion::Read { ticket, result } => (self.complete_read(ticket, result), Vec::new()),
        }
    }

    fn complete_listing(self, ticket: Ticket, result: CoreResult<DirectorySnapshot>) -> Step {
        let show_hidden = self.show_hidden;
        let result = result.map(|snapshot| {
            if show_hidden {
                snapshot
            } else {
                snapshot.without_hidden()
            }
        });

        if self.peek.as_ref().is_some_and(|p| p.ticket == ticket) {
            return (self.complete_peek(result), Vec::new());
        }

        let (context, outcome) = self.context.apply(ticket, result);
        let nav = Self { context, ..self };
        match outcome {
            LoadOutcome::Applied => nav.land(),
            LoadOutcome::Failed => (
                Self {
                    landing: None,
                    ..nav
                },
                Vec::new(),
            ),
            LoadOutcome::Stale => (nav, Vec::new()),
        }
    }

    fn complete_peek(self, result: CoreResult<DirectorySnapshot>) -> Self {
        let Some(peek) = self.peek else {
            return self;
        };
        let state = match result {
            Ok(snapshot) => PeekState::Ready(snapshot),
            Err(e) => {
                tracing::warn!(path = %peek.path.display(), error = %e, "peek failed");
                PeekState::Failed(e.to_string())
            }
        };
        let nav = Self {
            peek: Some(Peek { state, ..peek }),
            ..self
        };
        let selection = nav.selection.clamp(Pane::Contents, nav.content_count());
        Self { selection, ..nav }.rescroll(Pane::Contents)
    }

    /// Applies the pending landing after a successful listing.
    fn land(self) -> Step {
        let landing = self.landing.unwrap_or(Landing::Keep);
        let nav = match landing {
            Landing::Reset { focus } => {
                let mut selection = self.selection.reset_selection(None);
                if let Some(pane) = focus {
                    selection = selection.set_active_pane(pane);
                }
                Self {
                    selection,
                    folder_offset: 0,
                    content_offset: 0,
                    ..self
                }
            }
            Landing::Keep => self,
        };
        let nav = Self {
            landing: None,
            peek: None,
            ..nav
        };
        let nav = Self {
            selection: nav.selection.clamp(Pane::Folders, nav.folder_count()),
            ..nav
        }
        .rescroll(Pane::Folders);

        // The peeked folder is re-listed too; its completion clamps Contents.
        match nav.peek_target() {
            Some(path) => nav.request_peek(path),
            None => {
                let selection = nav.selection.clamp(Pane::Contents, nav.content_count());
                (Self { selection, ..nav }.rescroll(Pane::Contents), Vec::new())
            }
        }
    }

    fn complete_read(self, ticket: Ticket, result: CoreResult<Vec<String>>) -> Self {
        let preview = match &self.mode {
            Mode::Previewing(p) if p.ticket == ticket => p.clone(),
            _ => {
                tracing::debug!(ticket = ticket.0, "dropping stale file read");
                return self;
            }
        };
        let lines = result.unwrap_or_else(|e| {
            tracing::warn!(path = %preview.path.display(), error = %e, "preview read failed");
            vec![PREVIEW_ERROR_LINE.to_string()]
        });
        Self {
            mode: Mode::Previewing(Preview {
                lines: Some(lines),
                scroll: 0,
                ..preview
            }),
            ..self
        }
    }

    /// Executes `requests` (and any follow-ups) synchronously against `fs`.
    pub fn settle<F: Filesystem + ?Sized>(self, requests: Vec<Request>, fs: &F) -> Self {
        let mut queue: VecDeque<Request> = requests.into();
        let mut nav = self;
        while let Some(request) = queue.pop_front() {
            let (next, more) = nav.complete(execute(fs, request));
            nav = next;
            queue.extend(more);
        }
        nav
    }

    /// Handles `key` and settles its requests against `fs`.
    pub fn press<F: Filesystem + ?Sized>(self, key: Key, fs: &F) -> Self {
        let (nav, requests) = self.handle_key(key);
        nav.settle(requests, fs)
    }
}
