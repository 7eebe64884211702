//! Directory entry representation.

use std::ffi::{OsStr, OsString};

use crate::nfc_string;

/// What a directory child turned out to be after following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Directory,
    File,
    /// Sockets, FIFOs, devices and dangling links.
    Other,
}

/// A single child of a listed directory.
///
/// `DirectoryEntry` is immutable; a reload produces fresh entries. The display
/// name is NFC-normalised so decomposed filenames (as stored by macOS) display
/// and sort like their composed forms. Paths are always built from the
/// on-disk [`file_name`](Self::file_name), which is kept byte for byte.
///
/// # Examples
///
/// ```
/// use dirhop_core::fs::entry::{DirectoryEntry, EntryKind};
///
/// let entry = DirectoryEntry::new(".cache", EntryKind::Directory);
/// assert!(entry.is_dir());
/// assert!(entry.is_hidden());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    name: String,
    file_name: OsString,
    kind: EntryKind,
    is_hidden: bool,
    is_symlink: bool,
    size: u64,
}

impl DirectoryEntry {
    /// Creates an entry from a bare name and kind.
    pub fn new(name: impl AsRef<str>, kind: EntryKind) -> Self {
        let file_name = OsString::from(name.as_ref());
        let name = nfc_string(name.as_ref());
        let is_hidden = name.starts_with('.');
        Self {
            name,
            file_name,
            kind,
            is_hidden,
            is_symlink: false,
            size: 0,
        }
    }

    /// Creates an entry from a file name and the metadata obtained by
    /// following symlinks. `is_symlink` records whether the name itself is a link.
    pub fn from_metadata(name: &OsStr, metadata: &std::fs::Metadata, is_symlink: bool) -> Self {
        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else if metadata.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };
        let entry = Self {
            file_name: name.to_os_string(),
            ..Self::new(name.to_string_lossy(), kind)
        }
        .with_symlink(is_symlink);
        if kind == EntryKind::File {
            entry.with_size(metadata.len())
        } else {
            entry
        }
    }

    /// Returns a copy flagged as a symbolic link.
    pub fn with_symlink(self, is_symlink: bool) -> Self {
        Self { is_symlink, ..self }
    }

    /// Returns a copy with the given size in bytes.
    pub fn with_size(self, size: u64) -> Self {
        Self { size, ..self }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name as stored on disk, for joining onto a parent path.
    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Returns `true` if this entry is (or links to) a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Returns `true` if this entry is (or links to) a regular file.
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Returns `true` if the name starts with `.`.
    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    /// Returns `true` if this entry is a symbolic link.
    pub fn is_symlink(&self) -> bool {
        self.is_symlink
    }

    /// Returns the file size in bytes. Always `0` for non-files.
    pub fn size(&self) -> u64 {
        self.size
    }
}
