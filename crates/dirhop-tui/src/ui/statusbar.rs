//! Path line rendering.
//!
//! A single row above the panes showing the current directory, a loading
//! marker while a listing is in flight, the hidden-entries indicator and the
//! last load error.

use dirhop_core::config::theme::{parse_color, Theme};
use dirhop_core::nav::view::BrowserView;
use dirhop_core::LoadErrorKind;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the path line for the browser view.
pub fn render_path_line(f: &mut Frame, area: Rect, view: &BrowserView<'_>, theme: &Theme) {
    f.render_widget(Paragraph::new(path_line(view, theme)), area);
}

fn path_line<'a>(view: &BrowserView<'a>, theme: &Theme) -> Line<'a> {
    let mut spans = vec![Span::styled(
        format!(" {}", view.current_path.display()),
        Style::default()
            .fg(parse_color(&theme.statusbar.path_fg))
            .add_modifier(Modifier::BOLD),
    )];

    if !view.show_hidden {
        spans.push(Span::styled(
            "  [-H]",
            Style::default().fg(parse_color(&theme.statusbar.label_fg)),
        ));
    }
    if view.loading {
        spans.push(Span::styled(
            "  loading...",
            Style::default()
                .fg(parse_color(&theme.statusbar.loading_fg))
                .add_modifier(Modifier::ITALIC),
        ));
    }
    if let Some(error) = view.error {
        let error_style = Style::default().fg(parse_color(&theme.statusbar.error_fg));
        if let Some(kind) = view.error_kind {
            spans.push(Span::styled(
                format!("  [{}]", error_tag(kind)),
                error_style.add_modifier(Modifier::BOLD),
            ));
        }
        spans.push(Span::styled(format!("  {error}"), error_style));
    }
    Line::from(spans)
}

fn error_tag(kind: LoadErrorKind) -> &'static str {
    match kind {
        LoadErrorKind::NotFound => "missing",
        LoadErrorKind::PermissionDenied => "denied",
        LoadErrorKind::Other => "error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dirhop_core::nav::view::PaneView;
    use dirhop_core::Pane;
    use ratatui::style::Color;
    use std::path::Path;

    fn pane(pane: Pane) -> PaneView<'static> {
        PaneView {
            pane,
            title: String::new(),
            items: Vec::new(),
            offset: 0,
            total: 0,
            is_active: pane == Pane::Folders,
            hidden_above: 0,
            hidden_below: 0,
            message: None,
        }
    }

    fn view(error: Option<&'static str>, loading: bool) -> BrowserView<'static> {
        let error_kind = error.map(|_| LoadErrorKind::PermissionDenied);
        BrowserView {
            current_path: Path::new("/srv/data"),
            folders: pane(Pane::Folders),
            contents: pane(Pane::Contents),
            error,
            error_kind,
            loading,
            show_hidden: true,
            show_subfolders: false,
        }
    }

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn shows_current_path_only_when_idle() {
        let line = path_line(&view(None, false), &Theme::default());
        assert_eq!(text(&line), " /srv/data");
        assert_eq!(line.spans[0].style.fg, Some(Color::Cyan));
    }

    #[test]
    fn error_is_red() {
        let line = path_line(&view(Some("permission denied: /root"), false), &Theme::default());
        let last = line.spans.last().unwrap();
        assert_eq!(last.content.as_ref(), "  permission denied: /root");
        assert_eq!(last.style.fg, Some(Color::Red));
    }

    #[test]
    fn error_is_tagged_with_its_kind() {
        let line = path_line(&view(Some("permission denied: /root"), false), &Theme::default());
        assert_eq!(text(&line), " /srv/data  [denied]  permission denied: /root");

        let mut v = view(Some("path not found: /gone"), false);
        v.error_kind = Some(LoadErrorKind::NotFound);
        assert!(text(&path_line(&v, &Theme::default())).contains("[missing]"));
        assert_eq!(error_tag(LoadErrorKind::Other), "error");
    }

    #[test]
    fn loading_and_hidden_markers() {
        let mut v = view(None, true);
        v.show_hidden = false;
        let rendered = text(&path_line(&v, &Theme::default()));
        assert!(rendered.contains("[-H]"));
        assert!(rendered.contains("loading..."));
    }
}
