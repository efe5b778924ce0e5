//! Status document watcher.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

/// Watches the status document and signals when it changes.
///
/// Collectors typically replace the document atomically (write to a temp
/// file, then rename), which invalidates a file-level watch; watching the
/// parent directory survives the rename.
pub struct DocumentWatcher {
    path: PathBuf,
    change_tx: mpsc::Sender<()>,
}

impl DocumentWatcher {
    /// Create a new DocumentWatcher.
    ///
    /// Returns the watcher and a receiver that fires on document changes.
    pub fn new(path: &Path) -> (Self, mpsc::Receiver<()>) {
        let (change_tx, change_rx) = mpsc::channel(8);

        (
            Self {
                path: path.to_path_buf(),
                change_tx,
            },
            change_rx,
        )
    }

    /// Start watching in a background thread.
    ///
    /// The returned handle must stay alive for events to keep flowing.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.change_tx.clone();
        let file_name = self.path.file_name().map(|n| n.to_os_string());

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if !(event.kind.is_modify() || event.kind.is_create()) {
                        return;
                    }
                    let ours = file_name.as_ref().map_or(true, |name| {
                        event
                            .paths
                            .iter()
                            .any(|p| p.file_name() == Some(name.as_os_str()))
                    });
                    if ours {
                        // A queued signal already forces a re-read; extras
                        // can be dropped.
                        let _ = tx.try_send(());
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        watcher.watch(dir, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Document watcher started");
        Ok(watcher)
    }
}
