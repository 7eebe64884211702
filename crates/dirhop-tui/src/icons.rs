//! Nerd Font icon mapping for pane rows.
//!
//! Maps file extensions and special filenames to Nerd Font unicode glyphs.

use std::path::Path;

use dirhop_core::nav::view::{ItemKind, ItemView};

/// Returns a Nerd Font icon (with trailing space) for a pane row.
pub fn icon_for_item(item: &ItemView<'_>) -> &'static str {
    match item.kind {
        ItemKind::CurrentDir => "\u{f07c} ", // open folder
        ItemKind::Directory if item.is_symlink => "\u{f0c1} ",
        ItemKind::Directory => "\u{f07b} ",
        ItemKind::File => icon_for_filename(item.name).unwrap_or_else(|| {
            let ext = Path::new(item.name)
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("");
            icon_for_extension(ext)
        }),
    }
}

/// Plain-text marker used when icons are disabled.
pub fn marker_for_item(item: &ItemView<'_>) -> &'static str {
    match item.kind {
        ItemKind::CurrentDir | ItemKind::Directory => "/",
        ItemKind::File => " ",
    }
}

fn icon_for_filename(name: &str) -> Option<&'static str> {
    let icon = match name.to_lowercase().as_str() {
        "makefile" | "gnumakefile" => "\u{e779} ",
        "dockerfile" => "\u{f308} ",
        "cargo.toml" | "cargo.lock" => "\u{e7a8} ",
        ".gitignore" | ".gitmodules" | ".gitattributes" => "\u{e702} ",
        "license" | "license.md" | "license.txt" => "\u{f0219} ",
        "readme.md" | "readme" | "readme.txt" => "\u{e73e} ",
        ".bashrc" | ".zshrc" | ".profile" => "\u{f489} ",
        _ => return None,
    };
    Some(icon)
}

fn icon_for_extension(ext: &str) -> &'static str {
    match ext.to_lowercase().as_str() {
        "rs" => "\u{e7a8} ",
        "py" | "pyw" | "pyi" => "\u{e73c} ",
        "js" | "mjs" | "cjs" => "\u{e74e} ",
        "ts" | "mts" | "cts" => "\u{e628} ",
        "go" => "\u{e724} ",
        "c" | "h" => "\u{e61e} ",
        "cpp" | "cc" | "cxx" | "hpp" => "\u{e61d} ",

        "sh" | "bash" | "zsh" | "fish" => "\u{f489} ",
        "toml" | "ini" | "cfg" | "conf" => "\u{e615} ",
        "yaml" | "yml" => "\u{e6a8} ",
        "json" | "jsonc" => "\u{e60b} ",

        "md" | "markdown" => "\u{e73e} ",
        "txt" | "text" => "\u{f15c} ",
        "log" => "\u{f18d} ",
        "pdf" => "\u{f1c1} ",
        "csv" => "\u{f1c3} ",

        "zip" | "tar" | "gz" | "bz2" | "xz" | "7z" => "\u{f410} ",
        "png" | "jpg" | "jpeg" | "gif" | "bmp" | "webp" | "svg" => "\u{f1c5} ",
        "mp3" | "wav" | "flac" | "ogg" => "\u{f001} ",
        "mp4" | "mkv" | "mov" | "webm" => "\u{f03d} ",
        "lock" => "\u{f023} ",

        _ => "\u{f15b} ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, kind: ItemKind) -> ItemView<'_> {
        ItemView {
            name,
            kind,
            is_hidden: name.starts_with('.'),
            is_symlink: false,
            is_selected: false,
        }
    }

    #[test]
    fn folders_get_folder_icons() {
        assert_eq!(icon_for_item(&item("src", ItemKind::Directory)), "\u{f07b} ");
        assert_eq!(icon_for_item(&item(".", ItemKind::CurrentDir)), "\u{f07c} ");
    }

    #[test]
    fn symlinked_folder_gets_link_icon() {
        let link = ItemView {
            is_symlink: true,
            ..item("linked", ItemKind::Directory)
        };
        assert_eq!(icon_for_item(&link), "\u{f0c1} ");
    }

    #[test]
    fn extension_lookup_is_case_insensitive() {
        assert_eq!(icon_for_item(&item("main.rs", ItemKind::File)), "\u{e7a8} ");
        assert_eq!(icon_for_item(&item("PHOTO.JPG", ItemKind::File)), "\u{f1c5} ");
    }

    #[test]
    fn special_filename_wins_over_extension() {
        assert_eq!(icon_for_item(&item("README.md", ItemKind::File)), "\u{e73e} ");
        assert_eq!(icon_for_item(&item("Cargo.lock", ItemKind::File)), "\u{e7a8} ");
    }

    #[test]
    fn unknown_and_dotfiles_get_default_icon() {
        assert_eq!(icon_for_item(&item("data.xyz", ItemKind::File)), "\u{f15b} ");
        assert_eq!(icon_for_item(&item(".env", ItemKind::File)), "\u{f15b} ");
    }

    #[test]
    fn markers_without_icons() {
        assert_eq!(marker_for_item(&item("src", ItemKind::Directory)), "/");
        assert_eq!(marker_for_item(&item("a.txt", ItemKind::File)), " ");
    }
}
