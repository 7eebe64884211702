//! Messages exchanged between a frontend and the navigator.
//!
//! Keys flow **UI → Core**. The navigator never performs I/O itself: it
//! answers with [`Request`]s, which the frontend executes and feeds back as
//! [`Completion`]s tagged with the same [`Ticket`].

use std::path::PathBuf;

use crate::error::CoreResult;
use crate::fs::snapshot::DirectorySnapshot;

/// A decoded key press. This is the complete vocabulary the core accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Tab,
    Char(char),
    CtrlC,
    Home,
    Space,
}

/// Identifies one issued request. Later requests carry larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub u64);

/// I/O the navigator needs performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    ListDirectory { ticket: Ticket, path: PathBuf },
    ReadFile { ticket: Ticket, path: PathBuf },
}

impl Request {
    pub fn ticket(&self) -> Ticket {
        match self {
            Self::ListDirectory { ticket, .. } | Self::ReadFile { ticket, .. } => *ticket,
        }
    }
}

/// The outcome of a [`Request`].
#[derive(Debug)]
pub enum Completion {
    Listed {
        ticket: Ticket,
        result: CoreResult<DirectorySnapshot>,
    },
    Read {
        ticket: Ticket,
        result: CoreResult<Vec<String>>,
    },
}

impl Completion {
    pub fn ticket(&self) -> Ticket {
        match self {
            Self::Listed { ticket, .. } | Self::Read { ticket, .. } => *ticket,
        }
    }
}
