//! Colour theme.
//!
//! Colours are stored as strings (`"blue"`, `"dark_gray"`, `"#ff5500"`) so
//! theme files stay readable, and converted with [`parse_color`] at draw time.

use std::path::Path;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub panel: PanelTheme,
    #[serde(default)]
    pub statusbar: StatusBarTheme,
    #[serde(default)]
    pub preview: PreviewTheme,
}

impl Theme {
    /// Loads a theme from a TOML file at `path`. Missing keys keep their defaults.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(e, path))?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}

/// Pane list colours.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelTheme {
    pub dir_fg: String,
    pub symlink_fg: String,
    pub hidden_fg: String,
    pub selected_fg: String,
    pub active_border_fg: String,
    pub inactive_border_fg: String,
    pub indicator_fg: String,
}

impl Default for PanelTheme {
    fn default() -> Self {
        Self {
            dir_fg: "blue".into(),
            symlink_fg: "cyan".into(),
            hidden_fg: "dark_gray".into(),
            selected_fg: "yellow".into(),
            active_border_fg: "green".into(),
            inactive_border_fg: "dark_gray".into(),
            indicator_fg: "dark_gray".into(),
        }
    }
}

/// Path line, error banner and footer colours.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusBarTheme {
    pub path_fg: String,
    pub error_fg: String,
    pub loading_fg: String,
    pub key_fg: String,
    pub label_fg: String,
}

impl Default for StatusBarTheme {
    fn default() -> Self {
        Self {
            path_fg: "cyan".into(),
            error_fg: "red".into(),
            loading_fg: "yellow".into(),
            key_fg: "yellow".into(),
            label_fg: "gray".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewTheme {
    pub header_fg: String,
    pub header_bg: String,
    pub line_number_fg: String,
    pub border_fg: String,
}

impl Default for PreviewTheme {
    fn default() -> Self {
        Self {
            header_fg: "white".into(),
            header_bg: "dark_gray".into(),
            line_number_fg: "dark_gray".into(),
            border_fg: "blue".into(),
        }
    }
}

/// Converts a colour name or `#rrggbb` string into a [`Color`].
///
/// Names are case-insensitive and ignore underscores, so `"dark_gray"`,
/// `"DarkGray"` and `"darkgrey"` are equivalent. Anything unrecognised
/// yields [`Color::Reset`].
pub fn parse_color(s: &str) -> Color {
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).unwrap_or(Color::Reset);
    }
    let name: String = s
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    match name.replace("grey", "gray").as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" => Color::Gray,
        "darkgray" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parse_named_colors() {
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("white"), Color::White);
        assert_eq!(parse_color("light_cyan"), Color::LightCyan);
    }

    #[test]
    fn parse_color_spelling_variants() {
        assert_eq!(parse_color("dark_gray"), Color::DarkGray);
        assert_eq!(parse_color("DarkGray"), Color::DarkGray);
        assert_eq!(parse_color("dark-grey"), Color::DarkGray);
        assert_eq!(parse_color("GREY"), Color::Gray);
    }

    #[test]
    fn parse_hex_colors() {
        assert_eq!(parse_color("#ff5500"), Color::Rgb(255, 85, 0));
        assert_eq!(parse_color("#FFFFFF"), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn parse_invalid_values_reset() {
        assert_eq!(parse_color("chartreuse-ish"), Color::Reset);
        assert_eq!(parse_color(""), Color::Reset);
        assert_eq!(parse_color("#12345"), Color::Reset);
        assert_eq!(parse_color("#zzzzzz"), Color::Reset);
    }

    #[test]
    fn load_partial_theme_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("theme.toml");
        fs::write(&path, "[panel]\ndir_fg = \"magenta\"\n").unwrap();

        let theme = Theme::load(&path).unwrap();
        assert_eq!(theme.panel.dir_fg, "magenta");
        assert_eq!(theme.panel.hidden_fg, "dark_gray");
        assert_eq!(theme.statusbar.error_fg, "red");
    }

    #[test]
    fn load_missing_theme_is_not_found() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            Theme::load(&tmp.path().join("theme.toml")),
            Err(CoreError::NotFound(_))
        ));
    }
}
