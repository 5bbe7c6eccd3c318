// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod plan;
pub mod render;
pub mod schedule;
pub mod types;
pub mod watch;

use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{default_config_path, load_or_default};
use crate::engine::{schedule_plans, EffectiveSettings, Runtime, RuntimeEvent};
use crate::plan::{load_plans, validate_plan};
use crate::render::{render_day, render_dry_run, render_schedules};
use crate::watch::{spawn_watcher, InputFingerprint};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config + plan loading
/// - one scheduling pass, printed to stdout
/// - (optional) file watcher recomputing on change
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let output = evaluate(&args)?;
    print!("{output}");

    if !args.watch || args.dry_run {
        return Ok(());
    }

    let inputs = vec![PathBuf::from(&args.plan), config_path(&args)];
    let mut fingerprint = InputFingerprint::new(inputs.clone());
    fingerprint.refresh()?;

    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(64);
    let _watcher_handle = spawn_watcher(&inputs, rt_tx.clone())?;

    // Ctrl-C → graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
        });
    }

    Runtime::new(args, fingerprint, rt_rx).run().await?;
    Ok(())
}

/// One full pass: load config and plans, schedule, render.
///
/// Returns the text that `run` prints. Everything is reloaded from disk on
/// every call.
pub fn evaluate(args: &CliArgs) -> errors::Result<String> {
    let cfg = load_or_default(config_path(args), args.config.is_some())?;
    let settings = EffectiveSettings::resolve(&cfg, args)?;
    let plans = load_plans(&args.plan)?;

    if args.dry_run {
        for plan in &plans {
            validate_plan(plan)?;
        }
        debug!("dry-run complete (no scheduling)");
        return render_dry_run(&plans, settings.format);
    }

    let schedules = schedule_plans(&plans, &settings)?;

    match settings.query_date {
        Some(date) => render_day(&schedules, date, settings.format),
        None => render_schedules(&schedules, settings.format),
    }
}

fn config_path(args: &CliArgs) -> PathBuf {
    args.config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path)
}
