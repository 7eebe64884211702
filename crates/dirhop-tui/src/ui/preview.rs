//! File preview pager.
//!
//! Shows the visible slice of a [`PreviewView`] with a header row and line
//! numbers inside a bordered box of the configured viewport height.

use dirhop_core::config::theme::{parse_color, Theme};
use dirhop_core::nav::view::PreviewView;
use dirhop_core::nfc_string;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the pager into `area`.
pub fn render_preview(f: &mut Frame, area: Rect, view: &PreviewView<'_>, theme: &Theme) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let header_style = Style::default()
        .fg(parse_color(&theme.preview.header_fg))
        .bg(parse_color(&theme.preview.header_bg))
        .add_modifier(Modifier::BOLD);
    let header = Paragraph::new(Line::from(Span::styled(header_text(view), header_style)))
        .style(Style::default().bg(parse_color(&theme.preview.header_bg)));
    f.render_widget(header, vertical[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(parse_color(&theme.preview.border_fg)));
    let body = Paragraph::new(numbered_lines(view, theme)).block(block);
    f.render_widget(body, vertical[1]);
}

fn header_text(view: &PreviewView<'_>) -> String {
    let file_name = view
        .path
        .file_name()
        .map(|n| nfc_string(&n.to_string_lossy()))
        .unwrap_or_else(|| view.path.display().to_string());
    if view.loading {
        return format!(" {file_name}  loading...");
    }
    let first = if view.total == 0 { 0 } else { view.scroll + 1 };
    let last = view.scroll + view.lines.len();
    format!(
        " {file_name}  lines {first}-{last}/{}  (\u{2191}\u{2193}: scroll, Space/q: close)",
        view.total
    )
}

fn numbered_lines<'a>(view: &PreviewView<'a>, theme: &Theme) -> Vec<Line<'a>> {
    let width = view.total.to_string().len().max(3);
    let number_style = Style::default().fg(parse_color(&theme.preview.line_number_fg));
    view.lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            Line::from(vec![
                Span::styled(format!("{:>width$} ", view.scroll + i + 1), number_style),
                Span::raw(line.as_str()),
            ])
        })
        .collect()
}
