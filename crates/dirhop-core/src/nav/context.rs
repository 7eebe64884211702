//! Current location and the listing that describes it.

use std::path::{Path, PathBuf};

use crate::env::Environment;
use crate::error::{CoreResult, LoadErrorKind};
use crate::event::{Request, Ticket};
use crate::fs::snapshot::DirectorySnapshot;

/// Result of offering a finished listing to the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The listing replaced the snapshot and the current path.
    Applied,
    /// The load failed; the previous snapshot is kept and an error recorded.
    Failed,
    /// The ticket was superseded by a newer navigation and was ignored.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingLoad {
    ticket: Ticket,
    path: PathBuf,
}

/// Owns the current directory path, its latest snapshot and the last load error.
///
/// Navigation operations never touch the disk. They record a pending load
/// and return the [`Request`] that performs it; the path only changes once
/// [`DirectoryContext::apply`] receives a successful result for the most
/// recent request.
#[derive(Debug, Clone)]
pub struct DirectoryContext {
    env: Environment,
    current_path: PathBuf,
    snapshot: Option<DirectorySnapshot>,
    load_error: Option<(LoadErrorKind, String)>,
    pending: Option<PendingLoad>,
}

impl DirectoryContext {
    /// Creates a context positioned at the environment's start directory with
    /// nothing loaded yet.
    pub fn new(env: Environment) -> Self {
        Self {
            current_path: env.start_dir().clone(),
            env,
            snapshot: None,
            load_error: None,
            pending: None,
        }
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    pub fn snapshot(&self) -> Option<&DirectorySnapshot> {
        self.snapshot.as_ref()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_ref().map(|(_, message)| message.as_str())
    }

    pub fn load_error_kind(&self) -> Option<LoadErrorKind> {
        self.load_error.as_ref().map(|(kind, _)| *kind)
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Returns the path of the in-flight load, if any.
    pub fn pending_path(&self) -> Option<&Path> {
        self.pending.as_ref().map(|p| p.path.as_path())
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Joins `name` onto the current path without resolving symlinks.
    pub fn child_path(&self, name: impl AsRef<Path>) -> PathBuf {
        self.current_path.join(name)
    }

    /// Starts loading `path`. Re-issuing a navigation to a path already in
    /// flight restarts it under the new ticket.
    pub fn navigate_to_path(self, path: PathBuf, ticket: Ticket) -> (Self, Request) {
        tracing::debug!(path = %path.display(), ticket = ticket.0, "navigate");
        let request = Request::ListDirectory {
            ticket,
            path: path.clone(),
        };
        let ctx = Self {
            pending: Some(PendingLoad { ticket, path }),
            ..self
        };
        (ctx, request)
    }

    /// Starts loading the child `name` of the current path.
    pub fn navigate_to_folder(self, name: impl AsRef<Path>, ticket: Ticket) -> (Self, Request) {
        let path = self.child_path(name);
        self.navigate_to_path(path, ticket)
    }

    /// Starts loading the parent directory. Returns no request at the root.
    pub fn navigate_to_parent(self, ticket: Ticket) -> (Self, Option<Request>) {
        match self.current_path.parent().map(Path::to_path_buf) {
            Some(parent) if parent != self.current_path => {
                let (ctx, request) = self.navigate_to_path(parent, ticket);
                (ctx, Some(request))
            }
            _ => (self, None),
        }
    }

    /// Starts loading the home directory from the captured environment.
    pub fn navigate_home(self, ticket: Ticket) -> (Self, Request) {
        let home = self.env.home_dir();
        self.navigate_to_path(home, ticket)
    }

    /// Re-lists the current directory.
    pub fn reload(self, ticket: Ticket) -> (Self, Request) {
        let path = self.current_path.clone();
        self.navigate_to_path(path, ticket)
    }

    /// Applies a finished listing if `ticket` is the latest navigation.
    pub fn apply(
        self,
        ticket: Ticket,
        result: CoreResult<DirectorySnapshot>,
    ) -> (Self, LoadOutcome) {
        let pending_path = self
            .pending
            .as_ref()
            .filter(|p| p.ticket == ticket)
            .map(|p| p.path.clone());
        let Some(path) = pending_path else {
            tracing::debug!(ticket = ticket.0, "dropping stale listing");
            return (self, LoadOutcome::Stale);
        };

        match result {
            Ok(snapshot) => {
                tracing::debug!(
                    path = %path.display(),
                    entries = snapshot.combined().len(),
                    "listing applied"
                );
                let ctx = Self {
                    current_path: path,
                    snapshot: Some(snapshot),
                    load_error: None,
                    pending: None,
                    ..self
                };
                (ctx, LoadOutcome::Applied)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "listing failed");
                let ctx = Self {
                    load_error: Some((e.kind(), e.to_string())),
                    pending: None,
                    ..self
                };
                (ctx, LoadOutcome::Failed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::fs::entry::{DirectoryEntry, EntryKind};

    fn ctx(start: &str) -> DirectoryContext {
        DirectoryContext::new(Environment::new(PathBuf::from(start)))
    }

    fn snap(path: &str, folders: &[&str]) -> DirectorySnapshot {
        DirectorySnapshot::new(
            PathBuf::from(path),
            folders
                .iter()
                .map(|n| DirectoryEntry::new(n, EntryKind::Directory))
                .collect(),
        )
    }

    fn request_path(request: &Request) -> &Path {
        match request {
            Request::ListDirectory { path, .. } | Request::ReadFile { path, .. } => path,
        }
    }

    #[test]
    fn starts_at_start_dir_with_nothing_loaded() {
        let c = ctx("/a");
        assert_eq!(c.current_path(), Path::new("/a"));
        assert!(c.snapshot().is_none());
        assert!(c.load_error().is_none());
        assert!(!c.is_loading());
    }

    #[test]
    fn path_changes_only_after_successful_apply() {
        let (c, req) = ctx("/a").navigate_to_folder("b", Ticket(1));
        assert_eq!(request_path(&req), Path::new("/a/b"));
        assert_eq!(c.current_path(), Path::new("/a"));
        assert_eq!(c.pending_path(), Some(Path::new("/a/b")));

        let (c, outcome) = c.apply(Ticket(1), Ok(snap("/a/b", &["x"])));
        assert_eq!(outcome, LoadOutcome::Applied);
        assert_eq!(c.current_path(), Path::new("/a/b"));
        assert_eq!(c.snapshot().unwrap().folders().len(), 1);
        assert!(!c.is_loading());
    }

    #[test]
    fn failure_keeps_snapshot_and_sets_error() {
        let (c, _) = ctx("/a").navigate_to_path(PathBuf::from("/a"), Ticket(1));
        let (c, _) = c.apply(Ticket(1), Ok(snap("/a", &["b"])));

        let (c, _) = c.navigate_to_folder("b", Ticket(2));
        let (c, outcome) = c.apply(
            Ticket(2),
            Err(CoreError::PermissionDenied(PathBuf::from("/a/b"))),
        );

        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(c.current_path(), Path::new("/a"));
        assert_eq!(c.snapshot().unwrap().path(), Path::new("/a"));
        assert_eq!(c.load_error(), Some("permission denied: /a/b"));
        assert_eq!(c.load_error_kind(), Some(LoadErrorKind::PermissionDenied));
    }

    #[test]
    fn success_clears_previous_error() {
        let (c, _) = ctx("/a").navigate_to_path(PathBuf::from("/nope"), Ticket(1));
        let (c, _) = c.apply(Ticket(1), Err(CoreError::NotFound(PathBuf::from("/nope"))));
        assert!(c.load_error().is_some());

        let (c, _) = c.reload(Ticket(2));
        let (c, _) = c.apply(Ticket(2), Ok(snap("/a", &[])));
        assert!(c.load_error().is_none());
    }

    #[test]
    fn stale_completion_is_ignored() {
        let (c, _) = ctx("/a").navigate_to_folder("slow", Ticket(1));
        let (c, _) = c.navigate_to_folder("fast", Ticket(2));

        let (c, outcome) = c.apply(Ticket(2), Ok(snap("/a/fast", &[])));
        assert_eq!(outcome, LoadOutcome::Applied);

        let (c, outcome) = c.apply(Ticket(1), Ok(snap("/a/slow", &[])));
        assert_eq!(outcome, LoadOutcome::Stale);
        assert_eq!(c.current_path(), Path::new("/a/fast"));
    }

    #[test]
    fn renavigating_to_pending_path_restarts_load() {
        let (c, _) = ctx("/a").navigate_to_folder("b", Ticket(1));
        let (c, req) = c.navigate_to_folder("b", Ticket(2));
        assert_eq!(req.ticket(), Ticket(2));

        let (c, outcome) = c.apply(Ticket(1), Ok(snap("/a/b", &[])));
        assert_eq!(outcome, LoadOutcome::Stale);
        let (_, outcome) = c.apply(Ticket(2), Ok(snap("/a/b", &[])));
        assert_eq!(outcome, LoadOutcome::Applied);
    }

    #[test]
    fn parent_at_root_is_noop() {
        let (c, req) = ctx("/").navigate_to_parent(Ticket(1));
        assert!(req.is_none());
        assert!(!c.is_loading());
    }

    #[test]
    fn repeated_parent_reaches_fixed_point() {
        let mut c = ctx("/usr/local/share/doc");
        let mut ticket = 0;
        let mut seen = Vec::new();
        loop {
            ticket += 1;
            let (next, req) = c.navigate_to_parent(Ticket(ticket));
            let Some(req) = req else {
                c = next;
                break;
            };
            let path = request_path(&req).to_path_buf();
            let (next, _) = next.apply(Ticket(ticket), Ok(DirectorySnapshot::empty(path.clone())));
            seen.push(path);
            c = next;
            assert!(ticket < 20, "parent navigation never settled");
        }
        assert_eq!(c.current_path(), Path::new("/"));
        assert_eq!(seen.last().map(PathBuf::as_path), Some(Path::new("/")));

        let (again, req) = c.navigate_to_parent(Ticket(99));
        assert!(req.is_none());
        assert_eq!(again.current_path(), Path::new("/"));
    }

    #[test]
    fn home_uses_environment() {
        let env =
            Environment::new(PathBuf::from("/start")).with_home(Some(PathBuf::from("/home/u")));
        let (_, req) = DirectoryContext::new(env).navigate_home(Ticket(1));
        assert_eq!(request_path(&req), Path::new("/home/u"));
    }
}
