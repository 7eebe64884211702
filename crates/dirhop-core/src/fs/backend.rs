//! The storage seam the navigator's requests are executed against.

use std::path::Path;

use crate::error::CoreResult;
use crate::event::{Completion, Request};
use crate::fs::ops::read_directory;
use crate::fs::preview::read_text_preview;
use crate::fs::snapshot::DirectorySnapshot;

#[cfg(test)]
pub(crate) use memory::MemoryFs;

/// Lists directories and reads file contents.
///
/// Implementations must be shareable across threads so a frontend can run
/// them on a blocking worker pool.
pub trait Filesystem: Send + Sync {
    /// Lists the directory at `path`.
    fn list(&self, path: &Path) -> CoreResult<DirectorySnapshot>;

    /// Reads the file at `path` as display lines.
    fn read_lines(&self, path: &Path) -> CoreResult<Vec<String>>;
}

/// [`Filesystem`] backed by the local disk.
#[derive(Debug, Clone)]
pub struct LocalFs {
    max_preview_lines: usize,
}

impl LocalFs {
    pub fn new(max_preview_lines: usize) -> Self {
        Self { max_preview_lines }
    }
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new(10_000)
    }
}

impl Filesystem for LocalFs {
    fn list(&self, path: &Path) -> CoreResult<DirectorySnapshot> {
        read_directory(path)
    }

    fn read_lines(&self, path: &Path) -> CoreResult<Vec<String>> {
        read_text_preview(path, self.max_preview_lines).map(|p| p.into_display_lines())
    }
}

/// Performs `request` against `fs` and wraps the result for the navigator.
pub fn execute<F: Filesystem + ?Sized>(fs: &F, request: Request) -> Completion {
    match request {
        Request::ListDirectory { ticket, path } => Completion::Listed {
            ticket,
            result: fs.list(&path),
        },
        Request::ReadFile { ticket, path } => Completion::Read {
            ticket,
            result: fs.read_lines(&path),
        },
    }
}
