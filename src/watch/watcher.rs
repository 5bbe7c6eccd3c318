// src/watch/watcher.rs

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::engine::RuntimeEvent;

/// Handle for the filesystem watcher.
///
/// Keeps the underlying `RecommendedWatcher` alive. Dropping this handle
/// stops file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Watch the given input files and send `RuntimeEvent::InputChanged` when
/// one of them is modified.
///
/// The parent directories are watched rather than the files themselves, so
/// editors that save by replacing the file are still noticed.
pub fn spawn_watcher(
    files: &[PathBuf],
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> Result<WatcherHandle> {
    let targets: BTreeSet<PathBuf> = files.iter().map(|p| absolute(p)).collect();
    let dirs: BTreeSet<PathBuf> = targets
        .iter()
        .filter_map(|p| p.parent().map(Path::to_path_buf))
        .collect();

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if let Err(err) = event_tx.send(event) {
                    // No tracing here: this runs on notify's thread.
                    eprintln!("lessonsched: failed to forward notify event: {err}");
                }
            }
            Err(err) => {
                eprintln!("lessonsched: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    for dir in &dirs {
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        info!("watching {:?}", dir);
    }

    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            debug!("received notify event: {:?}", event);

            let Some(path) = event.paths.iter().map(|p| absolute(p)).find(|p| targets.contains(p))
            else {
                continue;
            };

            if let Err(err) = runtime_tx.send(RuntimeEvent::InputChanged { path }).await {
                warn!("failed to send RuntimeEvent::InputChanged: {err}");
                return;
            }
        }

        debug!("file watcher loop ended");
    });

    Ok(WatcherHandle { _inner: watcher })
}

/// Best-effort absolute form of `path` for comparing watcher paths.
fn absolute(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    // The file may not exist right now (mid-replace): canonicalize the
    // directory and re-attach the file name.
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            parent
                .canonicalize()
                .map(|p| p.join(name))
                .unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}
