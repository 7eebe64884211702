//! Pane list rendering with scroll indicators and theme support.
//!
//! A pane arrives already cut to its visible window; this module only
//! styles rows and draws the "↑ N more" / "↓ N more" markers on the border.

use dirhop_core::config::theme::{parse_color, Theme};
use dirhop_core::nav::view::{ItemKind, ItemView, PaneView};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::icons::{icon_for_item, marker_for_item};

/// Renders one pane: bordered list, title, scroll indicators and placeholder.
pub fn render_pane(
    f: &mut Frame,
    area: Rect,
    pane: &PaneView<'_>,
    theme: &Theme,
    show_icons: bool,
) {
    let border_color = if pane.is_active {
        parse_color(&theme.panel.active_border_fg)
    } else {
        parse_color(&theme.panel.inactive_border_fg)
    };
    let indicator_style = Style::default().fg(parse_color(&theme.panel.indicator_fg));

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(pane.title.clone())
        .border_style(Style::default().fg(border_color));
    if let Some(text) = indicator_text("\u{2191}", pane.hidden_above) {
        block = block.title_top(Line::from(Span::styled(text, indicator_style)).right_aligned());
    }
    if let Some(text) = indicator_text("\u{2193}", pane.hidden_below) {
        block = block.title_bottom(Line::from(Span::styled(text, indicator_style)).right_aligned());
    }

    if let Some(message) = &pane.message {
        let placeholder =
            Paragraph::new(Span::styled(message.clone(), indicator_style)).block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = pane
        .items
        .iter()
        .map(|item| ListItem::new(item_line(item, theme, show_icons)))
        .collect();

    let selected_color = parse_color(&theme.panel.selected_fg);
    let highlight = if pane.is_active {
        Style::default()
            .fg(selected_color)
            .add_modifier(Modifier::REVERSED)
    } else {
        Style::default().fg(selected_color)
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(pane.selected_row());
    f.render_stateful_widget(list, area, &mut state);
}

/// Scroll marker text, or `None` when nothing is hidden on that side.
fn indicator_text(arrow: &str, count: usize) -> Option<String> {
    (count > 0).then(|| format!(" {arrow} {count} more "))
}

fn item_line<'a>(item: &ItemView<'a>, theme: &Theme, show_icons: bool) -> Line<'a> {
    let prefix = if show_icons {
        icon_for_item(item)
    } else {
        marker_for_item(item)
    };
    Line::from(vec![
        Span::styled(prefix, item_style(item, theme)),
        Span::styled(item.name, item_style(item, theme)),
    ])
}

fn item_style(item: &ItemView<'_>, theme: &Theme) -> Style {
    match item.kind {
        ItemKind::CurrentDir | ItemKind::Directory if item.is_symlink => {
            Style::default().fg(parse_color(&theme.panel.symlink_fg))
        }
        ItemKind::CurrentDir | ItemKind::Directory => Style::default()
            .fg(parse_color(&theme.panel.dir_fg))
            .add_modifier(Modifier::BOLD),
        ItemKind::File if item.is_symlink => {
            Style::default().fg(parse_color(&theme.panel.symlink_fg))
        }
        ItemKind::File if item.is_hidden => {
            Style::default().fg(parse_color(&theme.panel.hidden_fg))
        }
        ItemKind::File => Style::default(),
    }
}
