//! Navigation logic for dirhop.
//!
//! [`navigator::Navigator`] is the state machine driven by key presses. It
//! composes the [`context::DirectoryContext`] (where we are), the
//! [`selection::SelectionTracker`] (what is highlighted) and the
//! [`scroll::ScrollWindow`] (what is visible), and exposes a render-ready
//! [`view::View`].

pub mod context;
pub mod navigator;
pub mod path;
pub mod scroll;
pub mod selection;
pub mod view;
