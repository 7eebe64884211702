//! Active pane and per-pane selection indices.

/// One of the two list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pane {
    #[default]
    Folders,
    Contents,
}

impl Pane {
    /// Returns the other pane.
    pub fn other(self) -> Self {
        match self {
            Self::Folders => Self::Contents,
            Self::Contents => Self::Folders,
        }
    }
}

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Tracks which pane is active and the selected index in each pane.
///
/// Immutable: every operation returns a new tracker. Indices are clamped by
/// [`SelectionTracker::move_selection`] against the item count supplied by
/// the caller; the tracker does not know the lists themselves, so callers
/// must reset or clamp after the underlying list changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionTracker {
    active: Pane,
    folder_index: usize,
    content_index: usize,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_pane(&self) -> Pane {
        self.active
    }

    /// Returns the selected index in `pane`.
    pub fn index(&self, pane: Pane) -> usize {
        match pane {
            Pane::Folders => self.folder_index,
            Pane::Contents => self.content_index,
        }
    }

    /// Returns the selected index in the active pane.
    pub fn active_index(&self) -> usize {
        self.index(self.active)
    }

    /// Toggles the active pane. Indices are untouched.
    pub fn switch_pane(self) -> Self {
        Self {
            active: self.active.other(),
            ..self
        }
    }

    pub fn set_active_pane(self, pane: Pane) -> Self {
        Self {
            active: pane,
            ..self
        }
    }

    /// Moves the active pane's index one step, clamped to `0..item_count`.
    /// No-op when `item_count` is zero.
    pub fn move_selection(self, direction: Direction, item_count: usize) -> Self {
        if item_count == 0 {
            return self;
        }
        let last = item_count - 1;
        let current = self.active_index();
        let next = match direction {
            Direction::Up => current.saturating_sub(1),
            Direction::Down => current.saturating_add(1),
        }
        .min(last);
        self.with_index(self.active, next)
    }

    /// Resets `pane`'s index to 0, or both when `pane` is `None`.
    pub fn reset_selection(self, pane: Option<Pane>) -> Self {
        match pane {
            Some(p) => self.with_index(p, 0),
            None => Self {
                folder_index: 0,
                content_index: 0,
                ..self
            },
        }
    }

    /// Clamps `pane`'s index to a list of `item_count` items.
    pub fn clamp(self, pane: Pane, item_count: usize) -> Self {
        let clamped = self.index(pane).min(item_count.saturating_sub(1));
        self.with_index(pane, clamped)
    }

    fn with_index(self, pane: Pane, index: usize) -> Self {
        match pane {
            Pane::Folders => Self {
                folder_index: index,
                ..self
            },
            Pane::Contents => Self {
                content_index: index,
                ..self
            },
        }
    }
}
