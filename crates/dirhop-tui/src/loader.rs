//! Executes navigator requests off the event loop.
//!
//! Each [`Request`] runs on a tokio blocking thread against a shared
//! [`Filesystem`]; the [`Completion`] is sent back to the main loop through
//! an unbounded mpsc channel and applied there, so navigator state is only
//! ever touched by one task.

use std::sync::Arc;

use dirhop_core::{execute, Completion, Filesystem, Request};
use tokio::sync::mpsc::UnboundedSender;

/// Spawns blocking tasks for navigator requests.
#[derive(Clone)]
pub struct Loader {
    fs: Arc<dyn Filesystem>,
    tx: UnboundedSender<Completion>,
}

impl Loader {
    pub fn new(fs: Arc<dyn Filesystem>, tx: UnboundedSender<Completion>) -> Self {
        Self { fs, tx }
    }

    /// Starts every request; results arrive on the channel in completion order.
    pub fn dispatch(&self, requests: Vec<Request>) {
        for request in requests {
            let fs = Arc::clone(&self.fs);
            let tx = self.tx.clone();
            tracing::debug!(ticket = request.ticket().0, "dispatch request");
            tokio::task::spawn_blocking(move || {
                let completion = execute(fs.as_ref(), request);
                // The receiver is gone only once the event loop has exited.
                let _ = tx.send(completion);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dirhop_core::{LocalFs, Ticket};
    use std::fs;
    use tempfile::TempDir;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn dispatch_delivers_completions() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("note.txt"), "hello\n").unwrap();

        let (tx, mut rx) = mpsc::unbounded_channel();
        let loader = Loader::new(Arc::new(LocalFs::default()), tx);
        loader.dispatch(vec![
            Request::ListDirectory {
                ticket: Ticket(1),
                path: tmp.path().to_path_buf(),
            },
            Request::ReadFile {
                ticket: Ticket(2),
                path: tmp.path().join("note.txt"),
            },
        ]);

        let mut completions = vec![rx.recv().await.unwrap(), rx.recv().await.unwrap()];
        completions.sort_by_key(Completion::ticket);

        match &completions[0] {
            Completion::Listed { result: Ok(snapshot), .. } => {
                assert_eq!(snapshot.folders().len(), 1);
                assert_eq!(snapshot.files().len(), 1);
            }
            other => panic!("unexpected completion: {other:?}"),
        }
        match &completions[1] {
            Completion::Read { result: Ok(lines), .. } => assert_eq!(lines, &["hello"]),
            other => panic!("unexpected completion: {other:?}"),
        }
    }

    #[tokio::test]
    async fn failures_are_delivered_not_dropped() {
        let tmp = TempDir::new().unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let loader = Loader::new(Arc::new(LocalFs::default()), tx);
        loader.dispatch(vec![Request::ListDirectory {
            ticket: Ticket(7),
            path: tmp.path().join("missing"),
        }]);

        let completion = rx.recv().await.unwrap();
        assert_eq!(completion.ticket(), Ticket(7));
        assert!(matches!(completion, Completion::Listed { result: Err(_), .. }));
    }
}
