//! One-line key help under the panes.

use dirhop_core::config::theme::{parse_color, Theme};
use dirhop_core::{Action, ActionRegistry, Keymap};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Keys that are not remappable, with the action they trigger.
const FIXED_KEYS: &[(&str, Action)] = &[
    ("Tab", Action::SwitchPane),
    ("\u{2191}\u{2193}", Action::CursorDown),
    ("Enter", Action::Enter),
    ("Space", Action::TogglePreview),
];

/// Character-bound actions shown in the footer, in display order.
const CHAR_ACTIONS: &[Action] = &[
    Action::GoHome,
    Action::ToggleSubfolders,
    Action::QuitAndNavigate,
    Action::Quit,
];

pub fn render_footer(
    f: &mut Frame,
    area: Rect,
    keymap: &Keymap,
    registry: &ActionRegistry,
    theme: &Theme,
) {
    let key_style = Style::default().fg(parse_color(&theme.statusbar.key_fg));
    let label_style = Style::default().fg(parse_color(&theme.statusbar.label_fg));

    let spans: Vec<Span> = footer_entries(keymap, registry)
        .into_iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(format!(" {key}"), key_style),
                Span::styled(format!(" {label} "), label_style),
            ]
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// `(key, label)` pairs for the footer. Unbound character actions are skipped.
fn footer_entries(keymap: &Keymap, registry: &ActionRegistry) -> Vec<(String, &'static str)> {
    let label = |action: Action| registry.descriptor_for(action).map(|d| d.name);

    let fixed = FIXED_KEYS
        .iter()
        .filter_map(|(key, action)| Some((key.to_string(), label(*action)?)));
    let bound = CHAR_ACTIONS.iter().filter_map(|action| {
        let keys = keymap.keys_for_action(*action)?;
        Some((keys.join("/"), label(*action)?))
    });
    fixed.chain(bound).collect()
}
