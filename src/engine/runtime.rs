// src/engine/runtime.rs

use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::cli::CliArgs;
use crate::watch::InputFingerprint;

/// Events sent into the runtime from the watcher or external signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// A watched input (plan or config) changed on disk.
    InputChanged { path: PathBuf },
    ShutdownRequested,
}

/// Counters for one watch session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WatchStats {
    /// Passes that produced a schedule.
    pub recomputed: usize,
    /// Events whose inputs hashed the same as before.
    pub skipped: usize,
    /// Passes that failed (unreadable inputs, bad plan or config).
    pub failed: usize,
}

/// Watch-mode loop: recompute and print the schedule whenever the inputs
/// change.
///
/// Each pass starts from scratch (reload config, reload plans, schedule);
/// nothing from the previous pass is reused. A pass that fails is logged
/// and the loop keeps waiting for the next change.
pub struct Runtime {
    args: CliArgs,
    fingerprint: InputFingerprint,
    events_rx: mpsc::Receiver<RuntimeEvent>,
}

impl Runtime {
    pub fn new(
        args: CliArgs,
        fingerprint: InputFingerprint,
        events_rx: mpsc::Receiver<RuntimeEvent>,
    ) -> Self {
        Self {
            args,
            fingerprint,
            events_rx,
        }
    }

    /// Process events until shutdown is requested or every sender is gone.
    pub async fn run(mut self) -> Result<WatchStats> {
        info!(inputs = ?self.fingerprint.paths(), "watching inputs for changes");
        let mut stats = WatchStats::default();

        while let Some(event) = self.events_rx.recv().await {
            debug!(?event, "runtime received event");

            match event {
                RuntimeEvent::InputChanged { path } => {
                    match self.fingerprint.refresh() {
                        Ok(true) => {}
                        Ok(false) => {
                            debug!(path = ?path, "input content unchanged; skipping");
                            stats.skipped += 1;
                            continue;
                        }
                        Err(err) => {
                            // Editors that replace on save can leave the file
                            // briefly unreadable; the next event retries.
                            warn!(path = ?path, "failed to hash inputs: {err:#}");
                            stats.failed += 1;
                            continue;
                        }
                    }

                    info!(path = ?path, "input changed; recomputing schedule");
                    match crate::evaluate(&self.args) {
                        Ok(output) => {
                            print!("{output}");
                            stats.recomputed += 1;
                        }
                        Err(err) => {
                            error!("failed to recompute schedule: {err}");
                            stats.failed += 1;
                        }
                    }
                }
                RuntimeEvent::ShutdownRequested => {
                    info!("shutdown requested; stopping watch loop");
                    break;
                }
            }
        }

        info!(?stats, "watch loop finished");
        Ok(stats)
    }
}
