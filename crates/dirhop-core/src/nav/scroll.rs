//! Scroll window calculation for fixed-height lists.

/// A fixed-height viewport that scrolls once the selection comes within
/// `trigger_margin` rows of either edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollWindow {
    window_height: usize,
    trigger_margin: usize,
}

impl Default for ScrollWindow {
    fn default() -> Self {
        Self::new(16, 3)
    }
}

impl ScrollWindow {
    pub fn new(window_height: usize, trigger_margin: usize) -> Self {
        Self {
            window_height,
            trigger_margin,
        }
    }

    pub fn window_height(&self) -> usize {
        self.window_height
    }

    pub fn trigger_margin(&self) -> usize {
        self.trigger_margin
    }

    /// Margin actually applied; capped so both edges' trigger zones fit
    /// inside the window without overlapping.
    fn effective_margin(&self) -> usize {
        self.trigger_margin
            .min(self.window_height.saturating_sub(1) / 2)
    }

    /// Returns the offset that keeps `selected` visible with minimal movement
    /// from `offset`.
    ///
    /// The result is always in `0..=total - window_height` when the list is
    /// taller than the window, and `selected` lies in
    /// `result..result + window_height`. Lists that fit return `0`.
    pub fn compute_offset(&self, selected: usize, offset: usize, total: usize) -> usize {
        let height = self.window_height;
        if height == 0 || total <= height {
            return 0;
        }
        let margin = self.effective_margin();
        let max_offset = total - height;
        let selected = selected.min(total - 1);

        let next = if selected + 1 + margin >= offset + height {
            (selected + margin + 1).saturating_sub(height)
        } else if selected <= offset + margin {
            selected.saturating_sub(margin)
        } else {
            offset
        };
        next.min(max_offset)
    }

    /// Returns `(hidden_above, hidden_below)` item counts for a window at `offset`.
    pub fn hidden_counts(&self, offset: usize, total: usize) -> (usize, usize) {
        let end = (offset + self.window_height).min(total);
        (offset.min(total), total - end)
    }
}
