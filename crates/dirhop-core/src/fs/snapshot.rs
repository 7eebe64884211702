//! Sorted, partitioned listing of a single directory.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::fs::entry::DirectoryEntry;

/// The immutable result of listing one directory.
///
/// Entries are stored once, folders first, so `combined()` is always exactly
/// `folders()` followed by `files()`. Anything that is not a directory
/// (regular files, special files, dangling links) lands in `files()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySnapshot {
    path: PathBuf,
    entries: Vec<DirectoryEntry>,
    folder_count: usize,
}

impl DirectorySnapshot {
    /// Builds a snapshot from unsorted entries.
    pub fn new(path: PathBuf, entries: Vec<DirectoryEntry>) -> Self {
        let (mut folders, mut files): (Vec<_>, Vec<_>) =
            entries.into_iter().partition(DirectoryEntry::is_dir);
        folders.sort_by(compare_names);
        files.sort_by(compare_names);

        let folder_count = folders.len();
        folders.extend(files);
        Self {
            path,
            entries: folders,
            folder_count,
        }
    }

    /// Returns an empty snapshot for `path`.
    pub fn empty(path: PathBuf) -> Self {
        Self {
            path,
            entries: Vec::new(),
            folder_count: 0,
        }
    }

    /// Returns a copy with dot-prefixed entries removed.
    pub fn without_hidden(&self) -> Self {
        let visible: Vec<DirectoryEntry> = self
            .entries
            .iter()
            .filter(|e| !e.is_hidden())
            .cloned()
            .collect();
        let folder_count = visible.iter().take_while(|e| e.is_dir()).count();
        Self {
            path: self.path.clone(),
            entries: visible,
            folder_count,
        }
    }

    /// The directory this snapshot describes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sub-directories, sorted by name.
    pub fn folders(&self) -> &[DirectoryEntry] {
        &self.entries[..self.folder_count]
    }

    /// Non-directories, sorted by name.
    pub fn files(&self) -> &[DirectoryEntry] {
        &self.entries[self.folder_count..]
    }

    /// Folders followed by files.
    pub fn combined(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Case-insensitive name order with a byte-wise tiebreak, so `"a"`, `"B"`
/// and `"b"` always come out as `a, B, b` regardless of input order.
pub fn compare_names(a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
    a.name()
        .to_lowercase()
        .cmp(&b.name().to_lowercase())
        .then_with(|| a.name().cmp(b.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::entry::EntryKind;

    fn dir(name: &str) -> DirectoryEntry {
        DirectoryEntry::new(name, EntryKind::Directory)
    }

    fn file(name: &str) -> DirectoryEntry {
        DirectoryEntry::new(name, EntryKind::File)
    }

    fn names(entries: &[DirectoryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name()).collect()
    }

    #[test]
    fn partitions_and_sorts() {
        let snap = DirectorySnapshot::new(
            PathBuf::from("/a"),
            vec![file("d.txt"), dir("c"), file("a.txt"), dir("b")],
        );

        assert_eq!(names(snap.folders()), vec!["b", "c"]);
        assert_eq!(names(snap.files()), vec!["a.txt", "d.txt"]);
        assert_eq!(names(snap.combined()), vec!["b", "c", "a.txt", "d.txt"]);
        assert_eq!(snap.path(), Path::new("/a"));
    }

    #[test]
    fn combined_is_folders_then_files() {
        let snap = DirectorySnapshot::new(
            PathBuf::from("/x"),
            vec![
                file("z"),
                dir("y"),
                file("Y"),
                dir("A"),
                DirectoryEntry::new("sock", EntryKind::Other),
            ],
        );
        let mut expected: Vec<DirectoryEntry> = snap.folders().to_vec();
        expected.extend_from_slice(snap.files());

        assert_eq!(snap.combined(), expected.as_slice());
        assert_eq!(snap.combined().len(), snap.folders().len() + snap.files().len());
        assert!(snap.folders().iter().all(|e| e.is_dir()));
        assert!(snap.files().iter().all(|e| !e.is_dir()));
    }

    #[test]
    fn ordering_is_case_insensitive_and_deterministic() {
        let forward = DirectorySnapshot::new(
            PathBuf::from("/"),
            vec![file("b"), file("B"), file("a"), file("C")],
        );
        let backward = DirectorySnapshot::new(
            PathBuf::from("/"),
            vec![file("C"), file("a"), file("B"), file("b")],
        );

        assert_eq!(names(forward.files()), vec!["a", "B", "b", "C"]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn sorted_groups_are_ascending() {
        let snap = DirectorySnapshot::new(
            PathBuf::from("/"),
            vec![dir("zeta"), dir("Alpha"), dir("beta"), file("x"), file("Ab")],
        );
        for pair in snap.folders().windows(2) {
            assert_ne!(compare_names(&pair[0], &pair[1]), Ordering::Greater);
        }
        for pair in snap.files().windows(2) {
            assert_ne!(compare_names(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn without_hidden_keeps_partition() {
        let snap = DirectorySnapshot::new(
            PathBuf::from("/h"),
            vec![dir(".git"), dir("src"), file(".env"), file("main.rs")],
        );
        let visible = snap.without_hidden();

        assert_eq!(names(visible.folders()), vec!["src"]);
        assert_eq!(names(visible.files()), vec!["main.rs"]);
    }

    #[test]
    fn empty_snapshot() {
        let snap = DirectorySnapshot::empty(PathBuf::from("/e"));
        assert!(snap.is_empty());
        assert!(snap.folders().is_empty());
        assert!(snap.files().is_empty());
    }
}
