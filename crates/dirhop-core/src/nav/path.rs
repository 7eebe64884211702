//! Path display helpers.

use std::path::{Path, MAIN_SEPARATOR};

const ELLIPSIS: &str = "...";

/// Shortens `path` to at most `max_chars` characters for a title bar.
///
/// Whole trailing components are kept where possible (`.../share/doc`);
/// a single component that is still too long is cut from the left.
pub fn truncate_for_display(path: &Path, max_chars: usize) -> String {
    let full = path.to_string_lossy();
    if full.chars().count() <= max_chars {
        return full.into_owned();
    }

    let parts: Vec<&str> = full.split(MAIN_SEPARATOR).collect();
    let shortened = if parts.len() <= 2 {
        full.to_string()
    } else {
        let mut kept: Vec<&str> = Vec::new();
        let mut len = 0usize;
        for part in parts.iter().rev() {
            let part_len = part.chars().count();
            let needed = if kept.is_empty() { part_len } else { len + part_len + 1 };
            if !kept.is_empty() && needed + ELLIPSIS.len() + 1 > max_chars {
                break;
            }
            kept.push(part);
            len = needed;
        }
        kept.reverse();
        let tail = kept.join(&MAIN_SEPARATOR.to_string());
        if kept.len() < parts.len() {
            format!("{ELLIPSIS}{MAIN_SEPARATOR}{tail}")
        } else {
            tail
        }
    };

    if shortened.chars().count() <= max_chars {
        return shortened;
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let skip = shortened.chars().count() - keep;
    format!("{ELLIPSIS}{}", shortened.chars().skip(skip).collect::<String>())
}
