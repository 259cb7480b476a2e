// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod watch;

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::cli::CliArgs;
use crate::config::model::Config;
use crate::watch::FileWatcher;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config path resolution + load-or-bootstrap
/// - watcher construction
/// - the worker (event consumer)
/// - the polling loop
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = match args.config.as_deref() {
        Some(raw) => config::expand_home(raw)?,
        None => config::default_config_path()?,
    };
    let cfg = config::load_or_init(&config_path)?;

    if args.dry_run {
        print_dry_run(&config_path, &cfg);
        return Ok(());
    }

    let mut watcher = FileWatcher::new(config_path, &cfg)?;
    let _worker = watcher.spawn_worker()?;

    info!("watching for file changes");

    tokio::select! {
        res = watcher.run() => res,
        _ = tokio::signal::ctrl_c() => {
            info!("interrupt received, shutting down");
            Ok(())
        }
    }
}

/// Simple dry-run output: print the resolved watch set and exit.
fn print_dry_run(config_path: &Path, cfg: &Config) {
    println!("watchrun dry-run");
    println!("  config = {}", config_path.display());
    println!("  interval = {:?}", cfg.interval());
    if let Some(ref dir) = cfg.directory {
        println!("  directory = {dir}");
    }
    println!();

    println!("files ({}):", cfg.files.len());
    for entry in cfg.files.iter() {
        println!("  - {}", entry.path);
        for cmd in entry.commands.iter() {
            let mode = if cmd.background {
                "background"
            } else {
                "foreground"
            };
            println!("      {} {:?} ({mode})", cmd.program, cmd.args);
        }
    }
}
