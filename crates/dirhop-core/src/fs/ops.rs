//! Directory reading operations.

use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::DirectoryEntry;
use crate::fs::snapshot::DirectorySnapshot;

/// Reads the immediate children of `path` into a sorted [`DirectorySnapshot`].
///
/// Symlinks are classified by what they point to, so a link to a directory is
/// a navigable folder. Dangling links are kept as non-directories. Children
/// that vanish or cannot be stat'ed mid-listing are skipped.
///
/// # Errors
///
/// - [`CoreError::NotFound`]: the path does not exist.
/// - [`CoreError::NotADirectory`]: the path is not a directory.
/// - [`CoreError::PermissionDenied`]: read access is denied.
/// - [`CoreError::Io`]: any other I/O error.
///
/// # Examples
///
/// ```no_run
/// use dirhop_core::read_directory;
/// use std::path::Path;
///
/// let snapshot = read_directory(Path::new("/usr")).unwrap();
/// for folder in snapshot.folders() {
///     println!("{}/", folder.name());
/// }
/// ```
pub fn read_directory(path: &Path) -> CoreResult<DirectorySnapshot> {
    let meta = std::fs::metadata(path).map_err(|e| CoreError::from_io(e, path))?;
    if !meta.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(path).map_err(|e| CoreError::from_io(e, path))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let Ok(dir_entry) = dir_entry else {
            continue;
        };
        let child = dir_entry.path();
        let Ok(link_meta) = std::fs::symlink_metadata(&child) else {
            continue;
        };
        let is_symlink = link_meta.file_type().is_symlink();
        let meta = if is_symlink {
            std::fs::metadata(&child).unwrap_or(link_meta)
        } else {
            link_meta
        };
        entries.push(DirectoryEntry::from_metadata(
            &dir_entry.file_name(),
            &meta,
            is_symlink,
        ));
    }

    tracing::debug!(path = %path.display(), count = entries.len(), "listed directory");
    Ok(DirectorySnapshot::new(path.to_path_buf(), entries))
}
