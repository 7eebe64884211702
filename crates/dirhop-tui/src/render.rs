//! Frame composition.
//!
//! Browsing: path line, the two panes side by side sized to the scroll
//! window, then the key-help footer. Previewing: the pager replaces the
//! panes.

use dirhop_core::nav::view::{BrowserView, PreviewView, View};
use dirhop_core::{ActionRegistry, Keymap, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::ui::footer::render_footer;
use crate::ui::panel::render_pane;
use crate::ui::preview::render_preview;
use crate::ui::statusbar::render_path_line;

/// Everything the renderer needs besides the view itself.
pub struct RenderContext<'a> {
    pub theme: &'a Theme,
    pub keymap: &'a Keymap,
    pub registry: &'a ActionRegistry,
    pub show_icons: bool,
    /// Rows per pane, excluding borders.
    pub window_height: usize,
    /// Rows in the pager, excluding header and borders.
    pub preview_height: usize,
}

/// Main render function: draws `view` into the whole frame.
pub fn render(f: &mut Frame, view: &View<'_>, ctx: &RenderContext<'_>) {
    match view {
        View::Browser(browser) => render_browser(f, browser, ctx),
        View::Preview(preview) => render_pager(f, preview, ctx),
        View::Terminated => {}
    }
}

fn render_browser(f: &mut Frame, view: &BrowserView<'_>, ctx: &RenderContext<'_>) {
    let [path_area, panes_area, footer_area] = browser_layout(f.area(), ctx.window_height);

    render_path_line(f, path_area, view, ctx.theme);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(panes_area);
    render_pane(f, panes[0], &view.folders, ctx.theme, ctx.show_icons);
    render_pane(f, panes[1], &view.contents, ctx.theme, ctx.show_icons);

    render_footer(f, footer_area, ctx.keymap, ctx.registry, ctx.theme);
}

fn render_pager(f: &mut Frame, view: &PreviewView<'_>, ctx: &RenderContext<'_>) {
    // header row + top and bottom border
    let height = rows(ctx.preview_height, 3);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(height), Constraint::Min(0)])
        .split(f.area());
    render_preview(f, vertical[0], view, ctx.theme);
}

/// Splits `area` into path line, pane row and footer. The pane row is the
/// scroll window plus borders; any extra terminal height stays blank.
fn browser_layout(area: Rect, window_height: usize) -> [Rect; 3] {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(rows(window_height, 2)),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);
    [vertical[0], vertical[1], vertical[2]]
}

fn rows(content: usize, chrome: usize) -> u16 {
    u16::try_from(content.saturating_add(chrome)).unwrap_or(u16::MAX)
}
