//! Plain-text file previews.
//!
//! Lines are decoded lossily, stripped of terminal escape sequences and
//! control characters, and capped at a caller-chosen maximum so a huge file
//! never pins more than that many lines in memory.

use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// Bytes inspected for NUL when deciding whether a file is binary.
const BINARY_CHECK_SIZE: usize = 8192;

/// Width that a tab expands to.
const TAB_WIDTH: usize = 4;

/// The first lines of a file, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPreview {
    pub lines: Vec<String>,
    /// Number of lines in the whole file.
    pub total_lines: usize,
    pub is_truncated: bool,
    pub is_binary: bool,
}

impl TextPreview {
    /// Flattens the preview into display lines, with a marker for binary or
    /// truncated content.
    pub fn into_display_lines(self) -> Vec<String> {
        if self.is_binary {
            return vec!["Binary file".to_string()];
        }
        let mut lines = self.lines;
        if self.is_truncated {
            lines.push(format!(
                "... truncated ({} more lines)",
                self.total_lines - lines.len()
            ));
        }
        lines
    }
}

/// Reads at most `max_lines` sanitised lines from the file at `path`.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `path` does not exist.
/// - [`CoreError::PermissionDenied`] if it cannot be opened.
/// - [`CoreError::NotAFile`] if it is not a regular file. FIFOs and devices
///   are rejected before opening, since opening a FIFO blocks.
/// - [`CoreError::Io`] on other I/O failures.
pub fn read_text_preview(path: &Path, max_lines: usize) -> CoreResult<TextPreview> {
    let meta = fs::metadata(path).map_err(|e| CoreError::from_io(e, path))?;
    if !meta.is_file() {
        return Err(CoreError::NotAFile(path.to_path_buf()));
    }
    if is_binary(path)? {
        return Ok(TextPreview {
            lines: Vec::new(),
            total_lines: 0,
            is_truncated: false,
            is_binary: true,
        });
    }

    let file = fs::File::open(path).map_err(|e| CoreError::from_io(e, path))?;
    let mut reader = BufReader::new(file);
    let mut lines = Vec::with_capacity(max_lines.min(256));
    let mut total_lines = 0usize;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        total_lines += 1;
        if lines.len() < max_lines {
            let raw = String::from_utf8_lossy(&buf);
            let raw = raw.trim_end_matches(['\n', '\r']);
            lines.push(sanitize_line(raw));
        }
    }

    Ok(TextPreview {
        is_truncated: total_lines > lines.len(),
        lines,
        total_lines,
        is_binary: false,
    })
}

/// Returns `true` if the first 8 KiB of the file contain a NUL byte.
pub fn is_binary(path: &Path) -> CoreResult<bool> {
    let mut file = fs::File::open(path).map_err(|e| CoreError::from_io(e, path))?;
    let mut buf = [0u8; BINARY_CHECK_SIZE];
    let read = file.read(&mut buf)?;
    Ok(buf[..read].contains(&0))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Escape {
    None,
    /// Just saw ESC.
    Start,
    /// Inside `ESC [ ...` until a final letter.
    Csi,
    /// Inside `ESC ] ...` until BEL or `ESC \`.
    Osc,
    /// Saw ESC inside an OSC string.
    OscEsc,
}

/// Removes ANSI escape sequences and control characters, expanding tabs.
pub fn sanitize_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut state = Escape::None;

    for c in line.chars() {
        state = match (state, c) {
            (Escape::None, '\x1b') => Escape::Start,
            (Escape::None, '\t') => {
                out.extend(std::iter::repeat(' ').take(TAB_WIDTH));
                Escape::None
            }
            (Escape::None, c) if c.is_control() => Escape::None,
            (Escape::None, c) => {
                out.push(c);
                Escape::None
            }
            (Escape::Start, '[') => Escape::Csi,
            (Escape::Start, ']') => Escape::Osc,
            (Escape::Start, _) => Escape::None,
            (Escape::Csi, c) if c.is_ascii_alphabetic() => Escape::None,
            (Escape::Csi, _) => Escape::Csi,
            (Escape::Osc, '\x07') => Escape::None,
            (Escape::Osc, '\x1b') => Escape::OscEsc,
            (Escape::Osc, _) => Escape::Osc,
            (Escape::OscEsc, '\\') => Escape::None,
            (Escape::OscEsc, _) => Escape::Osc,
        };
    }

    out
}
