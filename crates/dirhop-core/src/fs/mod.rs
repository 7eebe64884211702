//! File system side of dirhop.
//!
//! [`entry::DirectoryEntry`] and [`snapshot::DirectorySnapshot`] model one
//! listing; [`ops::read_directory`] and [`preview::read_text_preview`] read
//! them from disk; [`backend::Filesystem`] is the seam the navigator's I/O
//! requests are executed against.

pub mod backend;
pub mod entry;
pub mod ops;
pub mod preview;
pub mod snapshot;

pub use backend::{Filesystem, LocalFs};
pub use preview::TextPreview;
